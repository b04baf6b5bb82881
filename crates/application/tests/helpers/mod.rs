mod mock_zone_admin;

pub use mock_zone_admin::MockZoneAdmin;
