use contracts::domain::a004_event::aggregate::{EventDto, TicketTier};

use crate::shared::validate::{self, RuleSet};
use crate::shared::wizard::{StepDefinition, WizardSchema};

pub const CACHE_KEY: &str = "events";

pub fn event_rules() -> RuleSet<EventDto> {
    RuleSet::new(vec![
        validate::required("title", "Title", |d: &EventDto| &d.title),
        validate::required("description", "Description", |d: &EventDto| &d.description),
        validate::email("contactEmail", "Contact email", |d: &EventDto| {
            &d.contact_email
        }),
        validate::required("venue", "Venue", |d: &EventDto| &d.venue),
        validate::required("startsAt", "Start", |d: &EventDto| &d.starts_at),
        validate::required("endsAt", "End", |d: &EventDto| &d.ends_at),
        validate::non_empty_list("ticketTiers", "Add at least one ticket tier", |d: &EventDto| {
            d.ticket_tiers.len()
        }),
    ])
}

/// Ticket tiers sit on the terminal step: the staged tier input is still
/// mounted when submit runs, so its flush callback can force-commit a
/// half-typed row.
pub fn event_schema() -> WizardSchema<EventDto> {
    WizardSchema::new(
        vec![
            StepDefinition {
                label: "Details",
                fields: &["title", "description", "contactEmail"],
            },
            StepDefinition {
                label: "Venue & schedule",
                fields: &["venue", "startsAt", "endsAt"],
            },
            StepDefinition {
                label: "Media",
                fields: &[],
            },
            StepDefinition {
                label: "Ticket tiers",
                fields: &["ticketTiers"],
            },
        ],
        event_rules(),
    )
}

/// A ticket tier being typed, not yet part of the record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TierDraft {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

/// Commit a staged tier draft into the event's tier list.
///
/// A draft with a blank name is a no-op: force-flushing an untouched input
/// right before submit must not append an empty row.
pub fn flush_tier(draft: &TierDraft, dto: &mut EventDto) {
    let name = draft.name.trim();
    if name.is_empty() {
        return;
    }
    dto.ticket_tiers.push(TicketTier {
        name: name.to_string(),
        price: draft.price.trim().parse().unwrap_or(0.0),
        quantity: draft.quantity.trim().parse().unwrap_or(0),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{FlushRegistry, WizardCore};
    use std::sync::Arc;

    fn valid_dto() -> EventDto {
        EventDto {
            id: None,
            title: "Amapiano Night".into(),
            description: "Live DJ set on the rooftop".into(),
            contact_email: "events@rooftop.ng".into(),
            venue: "Rooftop Lounge".into(),
            starts_at: "2025-06-20T20:00".into(),
            ends_at: "2025-06-21T02:00".into(),
            ticket_tiers: vec![TicketTier {
                name: "Regular".into(),
                price: 5000.0,
                quantity: 200,
            }],
            image_urls: Vec::new(),
        }
    }

    #[test]
    fn blank_tier_draft_does_not_append() {
        let mut dto = valid_dto();
        let before = dto.ticket_tiers.clone();

        flush_tier(&TierDraft::default(), &mut dto);
        flush_tier(
            &TierDraft {
                name: "   ".into(),
                price: "1000".into(),
                quantity: "50".into(),
            },
            &mut dto,
        );

        assert_eq!(dto.ticket_tiers, before);
    }

    #[test]
    fn named_tier_draft_is_committed_with_parsed_numbers() {
        let mut dto = valid_dto();
        flush_tier(
            &TierDraft {
                name: " VIP ".into(),
                price: "15000".into(),
                quantity: "25".into(),
            },
            &mut dto,
        );

        let tier = dto.ticket_tiers.last().unwrap();
        assert_eq!(tier.name, "VIP");
        assert_eq!(tier.price, 15000.0);
        assert_eq!(tier.quantity, 25);
    }

    #[test]
    fn step_four_is_reachable_with_an_invalid_step_one_field() {
        // Forward navigation checks only the active step's subset. A user
        // who clears contactEmail after leaving step 1 still reaches step 4;
        // submit's whole-record validation is the gate that catches it.
        let mut core = WizardCore::new(Arc::new(event_schema()));
        core.load(valid_dto());

        assert!(core.next()); // step 2
        core.set_field("contactEmail", |d| d.contact_email.clear());
        assert!(core.next()); // step 3
        assert!(core.next()); // step 4
        assert_eq!(core.step(), 4);

        let flush = FlushRegistry::new();
        assert!(core.prepare_submit(&flush).is_err());
        assert!(core.errors.contains_key("contactEmail"));
    }

    #[test]
    fn registered_tier_flush_feeds_whole_record_validation() {
        // An event with no tiers passes only because the staged draft is
        // force-committed during the flush phase.
        let mut dto = valid_dto();
        dto.ticket_tiers.clear();

        let mut core = WizardCore::new(Arc::new(event_schema()));
        core.load(dto);

        let mut flush = FlushRegistry::new();
        let draft = TierDraft {
            name: "Early bird".into(),
            price: "2500".into(),
            quantity: "100".into(),
        };
        flush.register(move |d: &mut EventDto| flush_tier(&draft, d));

        let record = core.prepare_submit(&flush).unwrap();
        assert_eq!(record.ticket_tiers.len(), 1);
        assert_eq!(record.ticket_tiers[0].name, "Early bird");
    }
}
