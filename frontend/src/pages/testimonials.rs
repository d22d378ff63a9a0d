use yew::prelude::*;

use crate::content::TESTIMONIALS;

fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub dark: bool,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    html! {
        <section class={classes!("testimonials-section", if props.dark { "dark" } else { "light" })}>
            <h2>{"What our customers say"}</h2>
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <blockquote class="testimonial">
                        <span class="testimonial-stars" aria-label={format!("{} out of 5", t.rating)}>{ stars(t.rating) }</span>
                        <p>{ t.text }</p>
                        <footer>{ format!("{}, {}", t.name, t.city) }</footer>
                    </blockquote>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_rating_is_capped_at_five() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
