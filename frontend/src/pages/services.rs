use yew::prelude::*;

use crate::content::{ordered_services, Service};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: Vec<Service>,
    pub dark: bool,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let ordered = ordered_services(&props.services);

    html! {
        <section id="services" class={classes!("services-section", if props.dark { "dark" } else { "light" })}>
            <h2>{"Our services"}</h2>
            <div class="services-grid">
                { for ordered.iter().map(|service| html! {
                    <div key={service.id.clone()} class={classes!("service-card", (!service.available).then(|| "unavailable"))}>
                        <span class="service-icon">{ &service.icon }</span>
                        <h3>{ &service.title }</h3>
                        <p>{ &service.description }</p>
                        if !service.available {
                            <span class="service-badge">{"Temporarily unavailable"}</span>
                        }
                    </div>
                }) }
            </div>
        </section>
    }
}
