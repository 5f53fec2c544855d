pub mod credentials;
pub mod ledger;
pub mod report;

pub use credentials::{CredentialService, ADMIN_PASSWORD, ADMIN_USERNAME};
pub use ledger::{Ledger, Restored};
pub use report::{ReportService, UserExpenses};
