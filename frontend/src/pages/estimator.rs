use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::pricing::{PriceInput, ServiceTier, TimeOfDay, VehicleTier, PRICE_TABLE};

#[derive(Properties, PartialEq)]
pub struct EstimatorProps {
    pub dark: bool,
    #[prop_or("SAR".to_string())]
    pub currency: String,
}

#[function_component(Estimator)]
pub fn estimator(props: &EstimatorProps) -> Html {
    let input = use_state(PriceInput::default);
    let price = PRICE_TABLE.estimate(&input);

    let on_distance = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            let distance_km = el.value().parse::<f64>().unwrap_or(0.0).max(0.0);
            input.set(PriceInput { distance_km, ..(*input).clone() });
        })
    };
    let on_service = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let el: HtmlSelectElement = e.target_unchecked_into();
            if let Some(service) = ServiceTier::from_key(&el.value()) {
                input.set(PriceInput { service, ..(*input).clone() });
            }
        })
    };
    let on_vehicle = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let el: HtmlSelectElement = e.target_unchecked_into();
            if let Some(vehicle) = VehicleTier::from_key(&el.value()) {
                input.set(PriceInput { vehicle, ..(*input).clone() });
            }
        })
    };
    let on_time = {
        let input = input.clone();
        Callback::from(move |e: Event| {
            let el: HtmlSelectElement = e.target_unchecked_into();
            if let Some(time) = TimeOfDay::from_key(&el.value()) {
                input.set(PriceInput { time, ..(*input).clone() });
            }
        })
    };

    html! {
        <section id="pricing" class={classes!("estimator-section", if props.dark { "dark" } else { "light" })}>
            <div class="pricing-header">
                <h2>{"Estimate your tow"}</h2>
                <p>{"An indicative price. The final figure is confirmed on the phone before dispatch."}</p>
            </div>
            <div class="pricing-card estimator">
                <label>
                    {"Distance (km)"}
                    <input
                        type="number"
                        min="0"
                        step="1"
                        value={input.distance_km.to_string()}
                        oninput={on_distance}
                    />
                </label>
                <label>
                    {"Service"}
                    <select onchange={on_service}>
                        { for ServiceTier::ALL.iter().map(|tier| html! {
                            <option value={tier.key()} selected={*tier == input.service}>{ tier.label() }</option>
                        }) }
                    </select>
                </label>
                <label>
                    {"Vehicle"}
                    <select onchange={on_vehicle}>
                        { for VehicleTier::ALL.iter().map(|tier| html! {
                            <option value={tier.key()} selected={*tier == input.vehicle}>{ tier.label() }</option>
                        }) }
                    </select>
                </label>
                <label>
                    {"Time"}
                    <select onchange={on_time}>
                        <option value={TimeOfDay::Day.key()} selected={input.time == TimeOfDay::Day}>{"Day"}</option>
                        <option value={TimeOfDay::Night.key()} selected={input.time == TimeOfDay::Night}>{"Night (after 10pm)"}</option>
                    </select>
                </label>
                <div class="price">
                    <span class="amount">{ price }</span>
                    <span class="period">{ format!(" {}", props.currency) }</span>
                </div>
            </div>
        </section>
    }
}
