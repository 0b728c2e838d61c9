/// What an item id was classified as for a rollup query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Container,
    Truck,
}

/// Truck-vs-container disambiguation, mirroring the tie-break rule: a
/// registered container always wins; otherwise classify by which role has
/// transactions in the window, preferring container on ties (both roles
/// present, or neither).
pub fn classify_item(is_registered_container: bool, has_truck_usage: bool, has_container_usage: bool) -> ItemKind {
    if is_registered_container {
        return ItemKind::Container;
    }
    if has_container_usage {
        ItemKind::Container
    } else if has_truck_usage {
        ItemKind::Truck
    } else {
        ItemKind::Container
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_container_always_wins() {
        assert_eq!(classify_item(true, true, false), ItemKind::Container);
    }

    #[test]
    fn prefers_container_when_both_usages_present() {
        assert_eq!(classify_item(false, true, true), ItemKind::Container);
    }

    #[test]
    fn falls_back_to_truck_when_only_truck_usage() {
        assert_eq!(classify_item(false, true, false), ItemKind::Truck);
    }

    #[test]
    fn falls_back_to_container_when_neither_usage_present() {
        assert_eq!(classify_item(false, false, false), ItemKind::Container);
    }
}
