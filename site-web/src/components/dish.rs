//! Dish card

use leptos::prelude::*;
use shared::DishRecord;

use crate::components::StarRating;

#[component]
pub fn Dish(dish: &'static DishRecord) -> impl IntoView {
    view! {
        <div class="p-6 bg-white rounded-md border border-black/20 shadow-brand relative overflow-hidden text-center transition-all group h-full flex flex-col">
            <div class="relative mb-4 overflow-hidden rounded-md bg-gray-100">
                <img
                    class="w-full h-48 sm:h-56 object-cover transition-transform duration-300 hover:scale-105"
                    src=dish.image_path.as_str()
                    alt=dish.title.as_str()
                    loading="lazy"
                />
                {dish.favorited.then(|| view! {
                    <button class="absolute top-2 right-2 bg-white/80 rounded-full p-2 text-brandBlack hover:bg-brandGreen hover:text-white transition-colors">
                        <i class="fas fa-heart text-xl"></i>
                    </button>
                })}
                {dish.detailed.then(|| view! {
                    <button class="absolute top-2 left-2 bg-white/80 rounded-full p-2 text-brandBlack hover:bg-brandGreen hover:text-white transition-colors">
                        <i class="fas fa-eye text-xl"></i>
                    </button>
                })}
            </div>
            <div class="flex-grow flex flex-col">
                <h3 class="text-xl font-semibold text-gray-900 mb-2">{dish.title.as_str()}</h3>
                {dish.description.as_deref().map(|description| view! {
                    <p class="text-gray-600 text-sm mb-3 line-clamp-2">{description}</p>
                })}
                <div class="mt-auto">
                    <div class="flex justify-center mb-3">
                        <StarRating value=dish.rating_value()/>
                    </div>
                    <div class="flex items-center justify-between mt-2">
                        <span class="text-brandGreen font-bold text-xl">{dish.price.as_str()}</span>
                        <button class="bg-brandGreen text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-opacity-90 transition-colors">
                            "Add to Cart"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
