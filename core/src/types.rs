//! Shared primitive types used across the whole report pipeline.

/// A sales location, the `Sucursal` column.
pub type Branch = String;

/// The item sold, the `Producto` column.
pub type Product = String;

/// Branch choice meaning "no branch filter".
pub const ALL_BRANCHES: &str = "Todas";

/// Default file name of the exported statistics.
pub const STATS_FILE_NAME: &str = "estadisticas_producto.csv";
