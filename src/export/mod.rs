pub mod csv;

pub use self::csv::export_expenses_csv;
