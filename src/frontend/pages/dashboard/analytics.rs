use leptos::prelude::*;

use super::PanelCard;
use crate::api::{ApiClient, Scope};
use crate::frontend::components::{InfoAlert, Loading};
use crate::frontend::session::{fetch_on_mount, Remote};
use crate::models::ReviewAnalytics;
use crate::services::reviews::stars;

#[component]
pub fn AnalyticsPanel(scope: Scope) -> impl IntoView {
    let analytics: Remote<ReviewAnalytics> = RwSignal::new(None);
    fetch_on_mount(analytics, move |client: ApiClient| async move {
        client.review_analytics(scope).await
    });

    move || match analytics.get() {
        None => view! { <Loading/> }.into_any(),
        Some(Ok(data)) => view! { <AnalyticsView data=data/> }.into_any(),
        Some(Err(e)) => {
            log::warn!("Review analytics unavailable, showing sample data: {e}");
            view! {
                <InfoAlert message="Live review analytics are unavailable. Showing sample data."/>
                <AnalyticsView data=ReviewAnalytics::sample()/>
            }
            .into_any()
        }
    }
}

#[component]
fn AnalyticsView(data: ReviewAnalytics) -> impl IntoView {
    let average = data.average_rating;
    let total = data.total_reviews;
    let distribution = data.distribution_rows();
    let top_tours = data.top_tours;

    view! {
        <div class="grid gap-6 md:grid-cols-3">
            <PanelCard title="Overall">
                <p class="text-5xl font-bold text-white">{format!("{average:.1}")}</p>
                <p class="text-amber-400 text-lg">{stars(average)}</p>
                <p class="text-slate-400 text-sm">{format!("{total} reviews")}</p>
            </PanelCard>

            <div class="md:col-span-2">
                <PanelCard title="Rating distribution">
                    {distribution
                        .into_iter()
                        .map(|(rating, share)| {
                            view! {
                                <div class="flex items-center gap-3 text-sm text-slate-400 mb-2">
                                    <span class="w-8">{format!("{rating}★")}</span>
                                    <div class="flex-1 h-3 rounded bg-slate-800 overflow-hidden">
                                        <div
                                            class="h-full bg-gradient-to-r from-amber-400 to-orange-400 transition-all duration-700"
                                            style=format!("width: {:.0}%;", share * 100.0)
                                        ></div>
                                    </div>
                                    <span class="w-12 text-right">{format!("{:.0}%", share * 100.0)}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </PanelCard>
            </div>

            <div class="md:col-span-3">
                <PanelCard title="Top rated tours">
                    <ol class="space-y-3">
                        {top_tours
                            .into_iter()
                            .enumerate()
                            .map(|(rank, tour)| view! {
                                <li class="flex items-center justify-between">
                                    <a href=format!("/tours/{}", tour.tour_id) class="text-white hover:text-teal-300">
                                        {format!("{}. {}", rank + 1, tour.tour_title)}
                                    </a>
                                    <span class="text-amber-400 text-sm">
                                        {format!(
                                    "{} {:.1} ({} reviews)",
                                    stars(tour.average_rating),
                                    tour.average_rating,
                                    tour.review_count,
                                )}
                                    </span>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                </PanelCard>
            </div>
        </div>
    }
}
