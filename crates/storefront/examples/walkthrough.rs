//! Scripted walkthrough of the storefront engine.
//!
//! Registers a user, logs in with "remember me", browses the menu, fills a
//! cart, and logs out, tracing each step. Run with:
//!
//! ```bash
//! cargo run -p lilies-storefront --example walkthrough
//! ```

use lilies_core::ItemId;
use lilies_storefront::cart::Cart;
use lilies_storefront::config::StorefrontConfig;
use lilies_storefront::dashboard::greeting_now;
use lilies_storefront::routes::{Navigation, Route, resolve};
use lilies_storefront::services::auth::{LoginForm, RegisterForm};
use lilies_storefront::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = StorefrontConfig::load()?;
    let state = AppState::open(config)?;
    let auth = state.auth();

    info!(greeting = greeting_now(), "welcome to Lilies");

    // A fresh visitor cannot reach the dashboard.
    assert_eq!(resolve(Route::Dashboard, state.sessions()), Navigation::RedirectToLogin);

    let register = RegisterForm {
        name: "Ada Obi".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "hunter22".to_owned(),
        confirm_password: "hunter22".to_owned(),
        phone: "+234 800 000 0000".to_owned(),
    };
    match auth.register(&register).await {
        Ok(()) => info!("registered"),
        Err(e) => info!(error = %e, "registration skipped"),
    }

    let profile = auth
        .login(&LoginForm {
            email: "ada@example.com".to_owned(),
            password: "hunter22".to_owned(),
            remember_me: true,
        })
        .await?;
    info!(name = %profile.name, "logged in");

    assert_eq!(
        resolve(Route::Dashboard, state.sessions()),
        Navigation::Proceed(Route::Dashboard)
    );

    // Browse and fill the cart: two Burger Deluxe, one Crispy Samosa.
    for item in state.catalog().search("burger") {
        info!(name = %item.name, price = %item.price, "menu hit");
    }

    let mut cart = Cart::new();
    cart.add(ItemId::new(1));
    cart.add(ItemId::new(1));
    cart.add(ItemId::new(3));
    cart.toggle_favorite(ItemId::new(1));

    info!(
        items = cart.item_count(),
        subtotal = %cart.subtotal(state.catalog()),
        total = %cart.total_with_delivery(state.catalog(), state.config().delivery_fee),
        "cart ready"
    );

    info!(
        in_transit = state.orders().in_transit_count(),
        "orders badge"
    );

    auth.logout()?;
    assert_eq!(resolve(Route::Dashboard, state.sessions()), Navigation::RedirectToLogin);
    info!("logged out");

    Ok(())
}
