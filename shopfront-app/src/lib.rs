pub mod bootstrap;
pub mod driver;
pub mod input;

pub use bootstrap::{build_storefront, BootstrapError};
pub use driver::{RunReport, Storefront, StorefrontSettings};
pub use input::{prompt_purchase, InputError, PurchaseInput};
