use chrono::{Datelike, Local};
use yew::prelude::*;

pub fn copyright_line(year: i32) -> String {
    format!("© {} Forecast Dashboard", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer footer-center p-4 bg-base-100 text-base-content">
            <p class="text-sm text-gray-500">{ copyright_line(year) }</p>
        </footer>
    }
}
