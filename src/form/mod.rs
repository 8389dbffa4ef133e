mod controller;
mod redirect;
mod view;


pub use controller::{FormController, SubmitTicket};
pub use redirect::result_url;
pub use view::{render, FormError, ViewState, ViewSurface};
