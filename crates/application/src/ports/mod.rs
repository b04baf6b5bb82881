mod zone_admin;

pub use zone_admin::ZoneAdmin;
