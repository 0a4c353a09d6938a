//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::{AdminLayout, SiteShell};
use crate::pages::admin::{
    AdminApplications, AdminCategories, AdminDashboard, AdminFaqs, AdminPackages, AdminProfile,
    AdminSiteContent, AdminTeachers, AdminTestimonials, Login,
};
use crate::pages::public::{About, Contact, Faq, Home, NotFound, Packages, Register, Testimonials};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[layout(SiteShell)]
        #[route("/")]
        Home {},

        #[route("/packages")]
        Packages {},

        #[route("/about")]
        About {},

        #[route("/testimonials")]
        Testimonials {},

        #[route("/faq")]
        Faq {},

        #[route("/contact")]
        Contact {},

        // `?package=<id>` preselects a package on the form
        #[route("/register?:package")]
        Register { package: String },
    #[end_layout]

    #[route("/login")]
    Login {},

    // Admin routes
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/")]
            AdminDashboard {},

            #[route("/packages")]
            AdminPackages {},

            #[route("/categories")]
            AdminCategories {},

            #[route("/teachers")]
            AdminTeachers {},

            #[route("/testimonials")]
            AdminTestimonials {},

            #[route("/faqs")]
            AdminFaqs {},

            #[route("/applications")]
            AdminApplications {},

            #[route("/site-content")]
            AdminSiteContent {},

            #[route("/profile")]
            AdminProfile {},
        #[end_layout]
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
