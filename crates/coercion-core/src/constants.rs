/// Epoch integers whose magnitude reaches this value are read as milliseconds,
/// anything below it as seconds.
pub const EPOCH_MILLIS_THRESHOLD: u64 = 1_000_000_000_000;

/// Calendar date layouts accepted from text, tried in order.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
pub const SLASH_DATE_FORMAT: &str = "%Y/%m/%d";
pub const US_DATE_FORMAT: &str = "%m/%d/%Y";

pub const DATE_FORMATS: [&str; 3] = [ISO_DATE_FORMAT, SLASH_DATE_FORMAT, US_DATE_FORMAT];

const TIME_FORMAT: &str = "%H:%M:%S%.f";
const SHORT_TIME_FORMAT: &str = "%H:%M";

/// Date-time layouts without an offset.
pub const LOCAL_DATE_TIME_FORMATS: [&str; 8] = [
    const_str::concat!(ISO_DATE_FORMAT, "T", TIME_FORMAT),
    const_str::concat!(ISO_DATE_FORMAT, " ", TIME_FORMAT),
    const_str::concat!(ISO_DATE_FORMAT, "T", SHORT_TIME_FORMAT),
    const_str::concat!(ISO_DATE_FORMAT, " ", SHORT_TIME_FORMAT),
    const_str::concat!(SLASH_DATE_FORMAT, " ", TIME_FORMAT),
    const_str::concat!(SLASH_DATE_FORMAT, " ", SHORT_TIME_FORMAT),
    const_str::concat!(US_DATE_FORMAT, " ", TIME_FORMAT),
    const_str::concat!(US_DATE_FORMAT, " ", SHORT_TIME_FORMAT),
];

/// Date-time layouts carrying a numeric offset. RFC 3339 and RFC 2822 are
/// tried before these.
pub const OFFSET_DATE_TIME_FORMATS: [&str; 4] = [
    const_str::concat!(ISO_DATE_FORMAT, "T", TIME_FORMAT, "%z"),
    const_str::concat!(ISO_DATE_FORMAT, " ", TIME_FORMAT, "%z"),
    const_str::concat!(ISO_DATE_FORMAT, "T", SHORT_TIME_FORMAT, "%z"),
    const_str::concat!(ISO_DATE_FORMAT, " ", SHORT_TIME_FORMAT, "%z"),
];
