mod account;
mod admin_home;
mod brands;
mod categories;
mod checkout;
mod dashboard;
mod login;
mod markets;
mod not_found;
mod orders;
mod products;
mod shipping;
mod staff;

pub(crate) use account::MyOrdersPage;
pub(crate) use admin_home::ConsoleHomePage;
pub(crate) use brands::BrandsPage;
pub(crate) use categories::CategoriesPage;
pub(crate) use checkout::CheckoutPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use login::LoginPage;
pub(crate) use markets::MarketRequestsPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use orders::OrdersPage;
pub(crate) use products::ProductsPage;
pub(crate) use shipping::ShippingRatesPage;
pub(crate) use staff::{StaffDetailPage, StaffListPage};

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route path helpers so links and redirects stay in one place.
pub(crate) mod paths {
    pub fn staff_detail(id: &str) -> String {
        format!("/staff/{id}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=DashboardPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/user/orders") view=MyOrdersPage />
            <Route path=path!("/checkout") view=CheckoutPage />
            <Route path=path!("/admin") view=ConsoleHomePage />
            <Route path=path!("/admin/products") view=ProductsPage />
            <Route path=path!("/admin/categories") view=CategoriesPage />
            <Route path=path!("/admin/brands") view=BrandsPage />
            <Route path=path!("/admin/shipping") view=ShippingRatesPage />
            <Route path=path!("/admin/orders") view=OrdersPage />
            <Route path=path!("/admin/markets") view=MarketRequestsPage />
            <Route path=path!("/staff") view=StaffListPage />
            <Route path=path!("/staff/:id") view=StaffDetailPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
