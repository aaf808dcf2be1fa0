pub mod datetime_millis {
    use {
        serde::{
            de::Error,
            ser,
            Deserialize,
            Deserializer,
            Serializer,
        },
        time::{
            format_description::BorrowedFormatItem,
            macros::format_description,
            OffsetDateTime,
            PrimitiveDateTime,
            UtcOffset,
        },
    };

    // The auction service expects UTC instants truncated to whole milliseconds
    // with a literal `Z` suffix, never a numeric offset.
    const FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );

    /// Renders `b` in the service's wire format, `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    /// Sub-millisecond precision is truncated; non-UTC offsets are converted
    /// to UTC first so the `Z` marker stays truthful.
    pub fn format_datetime(b: &OffsetDateTime) -> Result<String, time::error::Format> {
        b.to_offset(UtcOffset::UTC).format(&FORMAT)
    }

    pub fn serialize<S>(b: &OffsetDateTime, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = format_datetime(b).map_err(ser::Error::custom)?;
        s.serialize_str(formatted.as_str())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(d)?;
        PrimitiveDateTime::parse(s.as_str(), &FORMAT)
            .map(PrimitiveDateTime::assume_utc)
            .map_err(|err| D::Error::custom(err.to_string()))
    }
}
