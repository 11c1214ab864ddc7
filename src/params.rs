// src/params.rs

// The Reach, Charlton/Woolwich - https://www.thereach.org.uk/
pub const HOST: &str = "portal.rockgympro.com";
pub const PORT: u16 = 80;
pub const OCCUPANCY_PATH: &str =
    "/portal/public/be94788ef672908b57b32977c18452dc/occupancy?&iframeid=occupancyCounter&fId=";

// The portal inlines its counter state as `var data = { ... };`
pub const DATA_VAR: &str = "data";
pub const DATA_DECL: &str = "var data = ";

// Graphite path: statsd.gauges.gym.{name}.{metric}
pub const METRIC_PREFIX: &str = "gym";
