use crate::zone_name::ZoneName;

/// Content of a NOTIFY message: one `<zone> IN SOA` question under a
/// transaction id. Identical for every target of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyQuery {
    pub id: u16,
    pub zone: ZoneName,
}

impl NotifyQuery {
    pub fn new(id: u16, zone: ZoneName) -> Self {
        Self { id, zone }
    }
}
