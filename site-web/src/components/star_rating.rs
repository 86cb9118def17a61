//! Interactive star rating

use leptos::prelude::*;
use lib_core::rating::StarRating as RatingState;

#[component]
pub fn StarRating(value: f64, #[prop(default = crate::utils::constants::MAX_STARS)] max: u8) -> impl IntoView {
    let rating = RwSignal::new(RatingState::new(value, max));
    let stars = rating.with_untracked(|r| r.max());

    view! {
        <div class="flex gap-0.5">
            {(1..=stars)
                .map(|star| {
                    let class = move || {
                        let color = if rating.with(|r| r.is_marked(star)) {
                            "text-brandGreen"
                        } else {
                            "text-brandGrey"
                        };
                        format!("fas fa-star text-lg sm:text-xl cursor-pointer transition-all w-5 text-center {}", color)
                    };
                    view! {
                        <span
                            data-value=star.to_string()
                            class=class
                            on:click=move |_| rating.update(|r| r.select(star))
                            on:mouseover=move |_| rating.update(|r| r.hover(star))
                            on:mouseleave=move |_| rating.update(|r| r.leave())
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}
