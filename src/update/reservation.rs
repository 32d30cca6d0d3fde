//! Reservation form edits and submission

use chrono::Local;

use crate::model::{ConfirmPrompt, Model, ReservationField, ReservationForm, ReservationSummary};

pub fn focus_next(model: &mut Model) {
    let form = &mut model.ui.reservation;
    form.focus = form.focus.next();
}

pub fn focus_prev(model: &mut Model) {
    let form = &mut model.ui.reservation;
    form.focus = form.focus.prev();
}

/// Left/Right on the focused field
pub fn adjust(model: &mut Model, forward: bool) {
    let today = Local::now().date_naive();
    let form = &mut model.ui.reservation;
    match form.focus {
        ReservationField::Campers => form.add_campers(if forward { 1 } else { -1 }),
        ReservationField::HikeIn => form.hike_in = !form.hike_in,
        ReservationField::Date => form.shift_date(if forward { 1 } else { -1 }, today),
        ReservationField::Submit => {}
    }
}

pub fn toggle_hike_in(model: &mut Model) {
    model.ui.reservation.hike_in = !model.ui.reservation.hike_in;
}

/// Open the confirmation summarising the form
pub fn submit(model: &mut Model) {
    model.ui.confirm = Some(ConfirmPrompt::Reservation(model.ui.reservation.summary()));
}

/// Prompt answered; the form resets either way
pub fn finish(model: &mut Model, accepted: bool, summary: &ReservationSummary) {
    if accepted {
        log::info!("Reservation search: {}", summary.lines().join(", "));
        model.show_toast(format!(
            "Your campsite reservation search for {} has been submitted",
            summary.date.format("%Y-%m-%d")
        ));
    }
    model.ui.reservation = ReservationForm::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::prompts::answer_prompt;

    #[test]
    fn test_submit_then_confirm_resets_form() {
        let mut model = Model::default();
        adjust(&mut model, true);
        adjust(&mut model, true);
        focus_next(&mut model);
        toggle_hike_in(&mut model);
        assert_eq!(model.ui.reservation.campers, 3);
        assert!(model.ui.reservation.hike_in);

        submit(&mut model);
        match &model.ui.confirm {
            Some(ConfirmPrompt::Reservation(summary)) => {
                assert_eq!(summary.campers, 3);
                assert!(summary.hike_in);
            }
            other => panic!("unexpected prompt {:?}", other),
        }

        assert!(answer_prompt(&mut model, true).is_empty());
        assert!(model.ui.confirm.is_none());
        assert_eq!(model.ui.reservation.campers, 1);
        assert!(!model.ui.reservation.hike_in);
        assert!(model.ui.toast_text().unwrap().contains("has been submitted"));
    }

    #[test]
    fn test_cancel_also_resets_form() {
        let mut model = Model::default();
        adjust(&mut model, true);
        submit(&mut model);
        answer_prompt(&mut model, false);
        assert_eq!(model.ui.reservation.campers, 1);
        assert!(model.ui.toast_text().is_none());
    }

    #[test]
    fn test_adjust_on_submit_field_is_noop() {
        let mut model = Model::default();
        focus_prev(&mut model);
        assert_eq!(model.ui.reservation.focus, ReservationField::Submit);
        let before = model.ui.reservation.clone();
        adjust(&mut model, true);
        assert_eq!(model.ui.reservation, before);
    }
}
