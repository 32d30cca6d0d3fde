//! Share sheet

use crate::logic::share::campsite_share;
use crate::messages::Command;
use crate::model::Model;

pub fn open_share(model: &mut Model, campsite_id: u32) {
    let Some(campsite) = model.directory.campsite(campsite_id) else {
        return;
    };
    model.ui.share_sheet = Some(campsite_share(campsite, &model.settings.base_url));
}

/// Copy the share message; the sheet stays open until the copy finishes
pub fn copy_share(model: &mut Model) -> Vec<Command> {
    let Some(payload) = model.ui.share_sheet.as_ref() else {
        return Vec::new();
    };

    if !model.settings.clipboard_available {
        model.show_toast("Set clipboard_command in config to copy share messages");
        return Vec::new();
    }

    vec![Command::CopyToClipboard {
        title: payload.title.clone(),
        text: payload.message.clone(),
    }]
}

pub fn close_share(model: &mut Model) {
    model.ui.share_sheet = None;
}

pub fn share_copied(model: &mut Model, result: Result<String, String>) {
    match result {
        Ok(title) => {
            model.ui.share_sheet = None;
            model.show_toast(format!("Copied {} to clipboard", title));
        }
        Err(message) => super::report_error(model, "Clipboard copy failed", &message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Campsite;

    fn model_with_campsite() -> Model {
        let mut model = Model::default();
        model.directory.campsites.items = vec![Campsite {
            id: 0,
            name: "React Lake".to_string(),
            image: "images/react-lake.jpg".to_string(),
            elevation: 1233,
            featured: true,
            description: "Calm".to_string(),
        }];
        model
    }

    #[test]
    fn test_open_share_builds_payload() {
        let mut model = model_with_campsite();
        open_share(&mut model, 0);
        let sheet = model.ui.share_sheet.as_ref().unwrap();
        assert_eq!(sheet.dialog_title, "Share React Lake");
        assert!(sheet.url.ends_with("/images/react-lake.jpg"));
    }

    #[test]
    fn test_copy_requires_clipboard() {
        let mut model = model_with_campsite();
        open_share(&mut model, 0);
        assert!(copy_share(&mut model).is_empty());
        assert!(model.ui.share_sheet.is_some());

        model.settings.clipboard_available = true;
        let commands = copy_share(&mut model);
        assert!(matches!(
            commands.as_slice(),
            [Command::CopyToClipboard { title, .. }] if title == "React Lake"
        ));
    }

    #[test]
    fn test_share_copied_closes_sheet() {
        let mut model = model_with_campsite();
        open_share(&mut model, 0);
        share_copied(&mut model, Ok("React Lake".to_string()));
        assert!(model.ui.share_sheet.is_none());
        assert_eq!(model.ui.toast_text(), Some("Copied React Lake to clipboard"));
    }
}
