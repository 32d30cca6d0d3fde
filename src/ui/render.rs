use ratatui::{layout::Rect, Frame};

use super::{
    about, campsite_info, contact, dialogs, directory, drawer, favorites, header, home, layout,
    legend, reservation, status_bar, toast,
};
use crate::model::{Model, Screen};

/// Main render function - orchestrates all UI rendering
///
/// Returns the campsite card area when one is visible, for the drag adapter.
pub fn render(f: &mut Frame, model: &Model) -> Option<Rect> {
    let size = f.area();
    let screen = model.current_screen();
    let vim_mode = model.settings.vim_mode;
    let drawer_open = model.navigation.drawer_open;

    let legend_height = legend::calculate_legend_height(size.width, screen, vim_mode, drawer_open);
    let layout_info = layout::calculate_layout(size, legend_height, drawer_open);

    header::render_header(
        f,
        layout_info.header_area,
        screen.chrome(),
        model.navigation.can_go_back(),
    );

    let content = layout_info.content_area;
    let mut card_area = None;
    match screen {
        Screen::Home => home::render_home(f, content, &model.directory),
        Screen::Directory => directory::render_directory(
            f,
            content,
            &model.directory.campsites,
            model.navigation.directory_selection,
            |id| model.favorites.contains(id),
        ),
        Screen::CampsiteInfo(campsite_id) => {
            card_area = campsite_info::render_campsite_info(
                f,
                content,
                &model.directory,
                campsite_id,
                model.favorites.contains(campsite_id),
                model.navigation.comments_scroll,
            );
        }
        Screen::Reservation => reservation::render_reservation(f, content, &model.ui.reservation),
        Screen::About => about::render_about(f, content, &model.directory.partners),
        Screen::Contact => contact::render_contact(f, content),
        Screen::Favorites => favorites::render_favorites(
            f,
            content,
            &model.directory.campsites,
            &model.favorite_campsites(),
            model.navigation.favorites_selection,
        ),
    }

    if let Some(drawer_area) = layout_info.drawer_area {
        drawer::render_drawer(f, drawer_area, model.navigation.drawer_selection, screen);
        // The drawer captures input, so the card is no drag target
        card_area = None;
    }

    legend::render_legend(f, layout_info.legend_area, screen, vim_mode, drawer_open);

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &model.settings.base_url,
        &model.directory.connection_state,
        model.ui.network.as_ref(),
        model.favorites.len(),
    );

    // Dialogs on top of everything but the toast
    if let Some(prompt) = &model.ui.confirm {
        dialogs::render_confirm(f, prompt);
    } else if let Some(modal) = &model.ui.comment_modal {
        dialogs::render_comment_modal(f, modal);
    } else if let Some(payload) = &model.ui.share_sheet {
        dialogs::render_share_sheet(f, payload, model.settings.clipboard_available);
    }

    if let Some(message) = model.ui.toast_text() {
        toast::render_toast(f, size, message);
    }

    card_area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Campsite;
    use ratatui::{backend::TestBackend, Terminal};

    fn model_on_details() -> Model {
        let mut model = Model::default();
        model.directory.campsites.items = vec![Campsite {
            id: 0,
            name: "React Lake".to_string(),
            image: "images/react-lake.jpg".to_string(),
            elevation: 1233,
            featured: true,
            description: "Nestled in the foothills".to_string(),
        }];
        model.directory.campsites.state = crate::model::LoadState::Loaded;
        model.navigation.navigate_root(Screen::Directory);
        model.navigation.push(Screen::CampsiteInfo(0));
        model
    }

    fn draw(model: &Model) -> (Option<Rect>, String) {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut card = None;
        terminal
            .draw(|f| {
                card = render(f, model);
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (card, text)
    }

    #[test]
    fn test_details_screen_exposes_card_area() {
        let (card, text) = draw(&model_on_details());
        assert!(card.is_some());
        assert!(text.contains("React Lake"));
        assert!(text.contains("Campsite Information"));
    }

    #[test]
    fn test_other_screens_have_no_card() {
        let (card, text) = draw(&Model::default());
        assert!(card.is_none());
        assert!(text.contains("Featured Campsite"));
    }

    #[test]
    fn test_drawer_hides_card_target() {
        let mut model = model_on_details();
        model.navigation.toggle_drawer();
        let (card, text) = draw(&model);
        assert!(card.is_none());
        assert!(text.contains("Reserve Campsite"));
    }

    #[test]
    fn test_prompt_rendered_over_screen() {
        let mut model = model_on_details();
        model.ui.confirm = Some(crate::model::ConfirmPrompt::AddFavorite {
            campsite_id: 0,
            campsite_name: "React Lake".to_string(),
        });
        let (_, text) = draw(&model);
        assert!(text.contains("Add Favorite"));
    }
}
