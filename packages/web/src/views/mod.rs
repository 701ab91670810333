mod home;
pub use home::Home;

mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod about_us;
pub use about_us::AboutUs;

mod contact_us;
pub use contact_us::ContactUs;
