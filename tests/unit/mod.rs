pub mod screener_properties;
