//! Gallery page.

use leptos::prelude::*;

use crate::components::layout::PageShell;

const SHOTS: [(&str, &str); 6] = [
    ("/img/gallery-plating.jpg", "Plating at a garden wedding"),
    ("/img/gallery-tasting.jpg", "Chef's tasting counter"),
    ("/img/gallery-live.jpg", "Live station service"),
    ("/img/gallery-dessert.jpg", "Dessert course"),
    ("/img/gallery-kitchen.jpg", "On-site kitchen setup"),
    ("/img/gallery-table.jpg", "Family-style table"),
];

#[component]
pub fn GalleryPage() -> impl IntoView {
    let figures = SHOTS
        .iter()
        .map(|(src, caption)| {
            view! {
                <figure class="gallery__item">
                    <img src=*src alt=*caption loading="lazy"/>
                    <figcaption>{*caption}</figcaption>
                </figure>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <PageShell>
            <section class="gallery">
                <h1>"Gallery"</h1>
                <div class="gallery__grid">{figures}</div>
            </section>
        </PageShell>
    }
}
