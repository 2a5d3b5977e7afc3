pub mod csv_file;
pub mod date;
pub mod io;
pub mod logging;
