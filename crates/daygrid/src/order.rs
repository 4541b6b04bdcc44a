//! Configurable display priority for events.
//!
//! An [`EventOrder`] is a list of [`OrderSpec`]s compared in turn until one
//! of them tells two events apart. In configuration each spec is written as
//! a field name, prefixed with `-` for descending order:
//!
//! ```toml
//! event_order = ["-all_day", "-span", "start", "title"]
//! ```
//!
//! The default puts all-day events first, then longer events, then earlier
//! ones, then sorts by title.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::Deserialize;

use daygrid_core::{collab::SegmentOrder, segment::Segment};

use crate::source::Event;

/// Property of an event that can be ordered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    /// All-day events sort after timed ones (use descending to put them first).
    AllDay,
    /// Number of covered columns.
    Span,
    /// First covered column.
    Start,
    /// Event title.
    Title,
}

impl OrderField {
    fn compare(self, a: &Segment<Event>, b: &Segment<Event>) -> Ordering {
        match self {
            Self::AllDay => a.payload().is_all_day().cmp(&b.payload().is_all_day()),
            Self::Span => a.col_span().cmp(&b.col_span()),
            Self::Start => a.first_col().cmp(&b.first_col()),
            Self::Title => a.payload().title().cmp(b.payload().title()),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::AllDay => "all_day",
            Self::Span => "span",
            Self::Start => "start",
            Self::Title => "title",
        }
    }
}

/// One ordering criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct OrderSpec {
    field: OrderField,
    descending: bool,
}

impl OrderSpec {
    /// Ascending order on `field`.
    pub fn ascending(field: OrderField) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    /// Descending order on `field`.
    pub fn descending(field: OrderField) -> Self {
        Self {
            field,
            descending: true,
        }
    }

    /// Returns the ordered field.
    pub fn field(&self) -> OrderField {
        self.field
    }

    /// Returns `true` for descending order.
    pub fn is_descending(&self) -> bool {
        self.descending
    }

    fn compare(&self, a: &Segment<Event>, b: &Segment<Event>) -> Ordering {
        let ordering = self.field.compare(a, b);
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl FromStr for OrderSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (descending, name) = match s.strip_prefix('-') {
            Some(name) => (true, name),
            None => (false, s),
        };

        let field = match name {
            "all_day" | "allDay" => OrderField::AllDay,
            "span" | "duration" => OrderField::Span,
            "start" => OrderField::Start,
            "title" => OrderField::Title,
            other => {
                return Err(format!(
                    "unknown event order field `{other}`, expected one of \
                     `all_day`, `span`, `start`, `title`"
                ));
            }
        };

        Ok(Self { field, descending })
    }
}

impl TryFrom<String> for OrderSpec {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for OrderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-")?;
        }
        write!(f, "{}", self.field.name())
    }
}

/// Ordered list of [`OrderSpec`]s used as the stacking preference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct EventOrder(Vec<OrderSpec>);

impl EventOrder {
    /// Creates an order from the given criteria, most significant first.
    pub fn new(specs: Vec<OrderSpec>) -> Self {
        Self(specs)
    }

    /// Returns the criteria.
    pub fn specs(&self) -> &[OrderSpec] {
        &self.0
    }
}

impl Default for EventOrder {
    fn default() -> Self {
        Self(vec![
            OrderSpec::descending(OrderField::AllDay),
            OrderSpec::descending(OrderField::Span),
            OrderSpec::ascending(OrderField::Start),
            OrderSpec::ascending(OrderField::Title),
        ])
    }
}

impl SegmentOrder<Event> for EventOrder {
    fn compare(&self, a: &Segment<Event>, b: &Segment<Event>) -> Ordering {
        self.0
            .iter()
            .map(|spec| spec.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(first: usize, last: usize, title: &str, all_day: bool) -> Segment<Event> {
        Segment::new(0, first, last, Event::new(title).with_all_day(all_day))
    }

    #[test]
    fn test_parse_spec() {
        let spec: OrderSpec = "-span".parse().unwrap();
        assert_eq!(spec, OrderSpec::descending(OrderField::Span));

        let spec: OrderSpec = "title".parse().unwrap();
        assert_eq!(spec, OrderSpec::ascending(OrderField::Title));

        assert!("-colour".parse::<OrderSpec>().is_err());
    }

    #[test]
    fn test_spec_display_round_trips_names() {
        assert_eq!(OrderSpec::descending(OrderField::AllDay).to_string(), "-all_day");
        assert_eq!(OrderSpec::ascending(OrderField::Start).to_string(), "start");
    }

    #[test]
    fn test_default_all_day_first() {
        let order = EventOrder::default();
        let timed = seg(0, 6, "Long timed", false);
        let all_day = seg(3, 3, "Holiday", true);
        assert_eq!(order.compare(&all_day, &timed), Ordering::Less);
    }

    #[test]
    fn test_default_longer_first() {
        let order = EventOrder::default();
        let short = seg(0, 0, "A", false);
        let long = seg(2, 5, "B", false);
        assert_eq!(order.compare(&long, &short), Ordering::Less);
    }

    #[test]
    fn test_default_earlier_then_title() {
        let order = EventOrder::default();
        let early = seg(1, 2, "Zed", false);
        let late = seg(3, 4, "Abe", false);
        assert_eq!(order.compare(&early, &late), Ordering::Less);

        let abe = seg(1, 2, "Abe", false);
        assert_eq!(order.compare(&abe, &early), Ordering::Less);
        assert_eq!(order.compare(&abe, &abe), Ordering::Equal);
    }

    #[test]
    fn test_empty_order_is_neutral() {
        let order = EventOrder::new(Vec::new());
        assert_eq!(
            order.compare(&seg(0, 0, "a", true), &seg(4, 6, "b", false)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_deserialize_order() {
        #[derive(Deserialize)]
        struct Holder {
            event_order: EventOrder,
        }

        let holder: Holder = toml::from_str(r#"event_order = ["start", "-title"]"#).unwrap();
        assert_eq!(
            holder.event_order.specs(),
            [
                OrderSpec::ascending(OrderField::Start),
                OrderSpec::descending(OrderField::Title)
            ]
        );

        let err = toml::from_str::<Holder>(r#"event_order = ["size"]"#).err();
        assert!(err.is_some());
    }
}
