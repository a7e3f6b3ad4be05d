use leptos::prelude::*;

use super::{Button, ButtonVariant, ErrorSlot, TextArea};
use crate::frontend::session::{spawn_action, update_loaded, use_session, Remote};
use crate::models::{timestamp, Review};
use crate::services::collections::upsert;
use crate::services::reviews::{stars, ReviewDraft, ReviewSummary};

#[component]
pub fn ReviewList(reviews: Vec<Review>) -> impl IntoView {
    let summary = ReviewSummary::from_reviews(&reviews);

    if reviews.is_empty() {
        return view! {
            <p class="text-slate-500 py-6">"No reviews yet. Be the first to share your experience."</p>
        }
        .into_any();
    }

    view! {
        <div class="grid gap-8 md:grid-cols-3">
            <div class="p-6 rounded-2xl bg-slate-900/60 border border-slate-800">
                <p class="text-5xl font-bold text-white">{format!("{:.1}", summary.average)}</p>
                <p class="text-amber-400 text-lg">{stars(summary.average)}</p>
                <p class="text-slate-400 text-sm mb-4">{format!("{} reviews", summary.count)}</p>
                {(1..=5u8)
                    .rev()
                    .map(|star| {
                        let width = format!("width: {:.0}%;", summary.share(star) * 100.0);
                        view! {
                            <div class="flex items-center gap-2 text-xs text-slate-400">
                                <span class="w-4">{star}</span>
                                <div class="flex-1 h-2 rounded bg-slate-800 overflow-hidden">
                                    <div class="h-full bg-amber-400" style=width></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <ul class="md:col-span-2 space-y-4">
                {reviews
                    .into_iter()
                    .map(|review| view! {
                        <li class="p-5 rounded-xl bg-slate-900/40 border border-slate-800">
                            <div class="flex items-center justify-between mb-2">
                                <span class="font-medium text-white">{review.author().to_string()}</span>
                                <span class="text-amber-400">{stars(f64::from(review.rating))}</span>
                            </div>
                            <p class="text-slate-300 text-sm">{review.comment.clone()}</p>
                            <p class="text-slate-600 text-xs mt-2">{timestamp::display(&review.created_at)}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_any()
}

/// Star picker and comment box. A submitted review is added to `reviews`.
#[component]
pub fn ReviewForm(tour_id: i64, reviews: Remote<Vec<Review>>) -> impl IntoView {
    let session = use_session();
    let rating = RwSignal::new(0u8);
    let hovered = RwSignal::new(0u8);
    let comment = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let draft = ReviewDraft {
            rating: rating.get_untracked(),
            comment: comment.get_untracked(),
        };
        let request = match draft.validate(tour_id) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        spawn_action(
            session,
            pending,
            move |client| async move { client.submit_review(&request).await },
            move |result| match result {
                Ok(review) => {
                    update_loaded(reviews, |items| upsert(items, review));
                    comment.set(String::new());
                    rating.set(0);
                    submitted.set(true);
                }
                Err(e) => error.set(Some(e)),
            },
        );
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=|| view! { <p class="text-emerald-300">"Thanks for your review!"</p> }
        >
            <form class="space-y-4 p-6 rounded-2xl bg-slate-900/60 border border-slate-800" on:submit=on_submit>
                <h3 class="text-lg font-semibold text-white">"Share your experience"</h3>
                <ErrorSlot error=error/>
                <div class="flex gap-1 text-3xl" on:mouseleave=move |_| hovered.set(0)>
                    {(1..=5u8)
                        .map(|star| view! {
                            <button
                                type="button"
                                class="transition-transform hover:scale-125"
                                class=("text-amber-400", move || star <= hovered.get().max(rating.get()))
                                class=("text-slate-600", move || star > hovered.get().max(rating.get()))
                                on:mouseenter=move |_| hovered.set(star)
                                on:click=move |_| rating.set(star)
                            >
                                "★"
                            </button>
                        })
                        .collect_view()}
                </div>
                <TextArea label="Comment" name="comment" value=comment required=true placeholder="What did you enjoy?"/>
                <Button variant=ButtonVariant::Primary loading=pending loading_text="Submitting...">
                    "Submit review"
                </Button>
            </form>
        </Show>
    }
}
