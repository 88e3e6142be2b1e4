use crate::modules::seized_items::core::record::SeizedItemRow;
use crate::modules::seized_items::core::returned_fields::ReturnedFields;
use crate::modules::seized_items::use_cases::register_seized_item::command::RegisterSeizedItem;
use crate::modules::seized_items::use_cases::register_seized_item::decision::{
    DecideError, Decision, References, parse_count,
};
use crate::shared::core::primitives::{RequestContext, non_blank};

pub fn decide_register(
    existing: Option<&SeizedItemRow>,
    command: RegisterSeizedItem,
    references: References,
    context: &RequestContext,
) -> Decision {
    if existing.is_some() {
        return Decision::Rejected {
            reason: DecideError::AlreadyExists,
        };
    }
    let Some(person_id) = non_blank(Some(command.person_id)) else {
        return Decision::Rejected {
            reason: DecideError::MissingOwner,
        };
    };
    let number = match parse_count(command.number) {
        Ok(number) => number,
        Err(reason) => return Decision::Rejected { reason },
    };
    if !references.item_type_exists {
        return Decision::Rejected {
            reason: DecideError::UnknownItemType(command.item_type_id),
        };
    }
    let depository_id = non_blank(command.depository_id);
    if let (Some(depository_id), false) = (&depository_id, references.depository_exists) {
        return Decision::Rejected {
            reason: DecideError::UnknownDepository(depository_id.clone()),
        };
    }

    Decision::Accepted {
        row: SeizedItemRow {
            seized_item_id: command.seized_item_id,
            person_id,
            item_type_id: command.item_type_id,
            number,
            date: command.date.unwrap_or(context.today),
            confiscated_by: non_blank(command.confiscated_by)
                .or_else(|| Some(context.person_id.clone())),
            status: command.status.unwrap_or_default(),
            depository_id,
            status_comment: non_blank(command.status_comment),
            returned: ReturnedFields::empty(),
            comments: non_blank(command.comments),
            created_at: context.now_ms,
            created_by: context.person_id.clone(),
            updated_at: context.now_ms,
            updated_by: context.person_id.clone(),
            deleted_at: None,
        },
    }
}
