mod audit_entry;
mod process;
mod process_table;
mod user;

pub use audit_entry::AuditEntry;
pub use process::Process;
pub use process_table::ProcessTable;
pub use user::User;
