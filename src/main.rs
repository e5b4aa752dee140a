use hirenext_portal::config::CONFIG;
use hirenext_portal::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} portal ({}) → {}", CONFIG.brand_name, CONFIG.environment, CONFIG.api_base_url);

    yew::Renderer::<App>::new().render();
}
