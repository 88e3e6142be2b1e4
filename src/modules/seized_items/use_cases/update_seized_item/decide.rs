use crate::modules::seized_items::core::record::SeizedItemRow;
use crate::modules::seized_items::use_cases::register_seized_item::decision::{
    DecideError, Decision, References, parse_count,
};
use crate::modules::seized_items::use_cases::update_seized_item::command::UpdateSeizedItem;
use crate::shared::core::primitives::{RequestContext, non_blank};

/// Apply a patch to the current row. The returned fields are left as they are;
/// they are brought in line with the new status after the save.
pub fn decide_update(
    current: SeizedItemRow,
    patch: UpdateSeizedItem,
    references: References,
    context: &RequestContext,
) -> Decision {
    let mut row = current;

    if let Some(person_id) = patch.person_id {
        match non_blank(Some(person_id)) {
            Some(person_id) => row.person_id = person_id,
            None => {
                return Decision::Rejected {
                    reason: DecideError::MissingOwner,
                };
            }
        }
    }
    if let Some(item_type_id) = patch.item_type_id {
        let Some(item_type_id) = non_blank(Some(item_type_id)) else {
            return Decision::Rejected {
                reason: DecideError::MissingItemType,
            };
        };
        if !references.item_type_exists {
            return Decision::Rejected {
                reason: DecideError::UnknownItemType(item_type_id),
            };
        }
        row.item_type_id = item_type_id;
    }
    if let Some(number) = patch.number {
        match parse_count(number) {
            Ok(number) => row.number = number,
            Err(reason) => return Decision::Rejected { reason },
        }
    }
    if let Some(depository_id) = patch.depository_id {
        let depository_id = non_blank(Some(depository_id));
        if let (Some(depository_id), false) = (&depository_id, references.depository_exists) {
            return Decision::Rejected {
                reason: DecideError::UnknownDepository(depository_id.clone()),
            };
        }
        row.depository_id = depository_id;
    }
    if let Some(confiscated_by) = patch.confiscated_by {
        row.confiscated_by = non_blank(Some(confiscated_by));
    }
    if let Some(status) = patch.status {
        row.status = status;
    }
    if let Some(status_comment) = patch.status_comment {
        row.status_comment = non_blank(Some(status_comment));
    }
    if let Some(comments) = patch.comments {
        row.comments = non_blank(Some(comments));
    }
    if let Some(date) = patch.date {
        row.date = date;
    }

    row.touch(context.now_ms, &context.person_id);
    Decision::Accepted { row }
}
