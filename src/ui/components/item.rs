//! Marketplace row component.
//!
//! Builds the element tree of one listing row from its [`ItemView`]:
//!
//! ```text
//! div#marketplace-plugin-<id>.marketplace-row[.item-error]
//! ├── div.plugin-icon > (img[src] | placeholder-icon)
//! ├── div.details
//! │   ├── (a[href,target,rel] | span)[aria-label]
//! │   │   ├── "<name> "  span.subtitle "(<version>)"
//! │   │   └── p.description[.error-text]
//! │   └── div.update?  "Update available: " <version> " - " b > a "Update"
//! └── div.actions
//!     └── router-link[to] > button.btn-outline "Configure"
//!         | button.btn-primary[disabled?] ("Install" | "Try Again" | spinner "Installing...")
//! ```

use crate::ui::item_view::{ActionState, Description, Gesture, Icon, ItemView, UpdatePrompt};
use crate::ui::tree::{Element, Node, Tag};

/// Renders a row to its element tree.
#[must_use]
pub fn render_item(view: &ItemView) -> Node {
    Element::new(Tag::Div)
        .id(view.row_id.as_str())
        .class("marketplace-row")
        .class_if("item-error", view.description.is_error())
        .child(render_icon(&view.icon))
        .child(
            Element::new(Tag::Div)
                .class("details")
                .child(render_details(view))
                .children(view.update.as_ref().map(render_update)),
        )
        .child(
            Element::new(Tag::Div)
                .class("actions")
                .child(render_action(&view.action)),
        )
        .into_node()
}

fn render_icon(icon: &Icon) -> Element {
    let inner = match icon {
        Icon::Image(src) => Element::new(Tag::Image).attr("src", src.as_str()),
        Icon::Placeholder => Element::new(Tag::PlaceholderIcon),
    };
    Element::new(Tag::Div).class("plugin-icon").child(inner)
}

fn render_details(view: &ItemView) -> Element {
    let wrapper = view.homepage_url.as_ref().map_or_else(
        || Element::new(Tag::Span),
        |href| {
            Element::new(Tag::Anchor)
                .class("row-link")
                .attr("href", href.as_str())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
        },
    );

    let description = match &view.description {
        Description::Text(text) => Element::new(Tag::Paragraph).class("description").text(text.as_str()),
        Description::Error(error) => Element::new(Tag::Paragraph)
            .class("description")
            .class("error-text")
            .text(error.as_str()),
    };

    wrapper
        .attr("aria-label", view.accessible_label.as_str())
        .text(format!("{} ", view.name))
        .child(
            Element::new(Tag::Span)
                .class("subtitle")
                .text(view.version_label.as_str()),
        )
        .child(description)
}

fn render_update(update: &UpdatePrompt) -> Element {
    let version: Node = update.release_notes_url.as_ref().map_or_else(
        || Node::Text(update.available_version.clone()),
        |href| {
            Element::new(Tag::Anchor)
                .attr("href", href.as_str())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text(update.available_version.as_str())
                .into_node()
        },
    );

    Element::new(Tag::Div)
        .class("update")
        .text("Update available: ")
        .child(version)
        .text(" - ")
        .child(
            Element::new(Tag::Bold).child(
                Element::new(Tag::Anchor)
                    .class("update-action")
                    .on_click(Gesture::Update)
                    .text("Update"),
            ),
        )
}

fn render_action(action: &ActionState) -> Element {
    match action {
        ActionState::Configure { path } => Element::new(Tag::RouterLink).attr("to", path.as_str()).child(
            Element::new(Tag::Button)
                .class("btn-outline")
                .on_click(Gesture::Configure)
                .text(action.label()),
        ),
        ActionState::Install { enabled } | ActionState::TryAgain { enabled } => Element::new(Tag::Button)
            .class("btn-primary")
            .on_click(Gesture::Install)
            .disabled(!enabled)
            .text(action.label()),
        ActionState::Installing => Element::new(Tag::Button)
            .class("btn-primary")
            .on_click(Gesture::Install)
            .disabled(true)
            .child(Element::new(Tag::Spinner).text(action.label())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InstallState, ListingEntry};

    fn render(entry: &ListingEntry) -> Node {
        render_item(&ItemView::from_entry(entry))
    }

    fn entry() -> ListingEntry {
        let mut entry = ListingEntry::new("zoom", "Zoom", "Video calls", "1.4.0");
        entry.download_url = Some("https://example.com/zoom.tar.gz".into());
        entry
    }

    fn action_button(tree: &Node) -> &Element {
        tree.find(&|e: &Element| e.tag == Tag::Button).unwrap()
    }

    #[test]
    fn row_carries_element_id() {
        let tree = render(&entry());
        assert!(tree.find_by_id("marketplace-plugin-zoom").is_some());
    }

    #[test]
    fn icon_image_uses_icon_data() {
        let mut e = entry();
        e.icon_data = Some("data:image/png;base64,AAA".into());
        let tree = render(&e);
        let images = tree.find_all(Tag::Image);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].get_attr("src"), Some("data:image/png;base64,AAA"));
        assert!(tree.find_all(Tag::PlaceholderIcon).is_empty());
    }

    #[test]
    fn missing_icon_renders_placeholder() {
        let tree = render(&entry());
        assert!(tree.find_all(Tag::Image).is_empty());
        assert_eq!(tree.find_all(Tag::PlaceholderIcon).len(), 1);
    }

    #[test]
    fn homepage_wraps_details_in_safe_link() {
        let mut e = entry();
        e.homepage_url = Some("https://zoom.example.com".into());
        let tree = render(&e);
        let link = tree.find(&|el: &Element| el.has_class("row-link")).unwrap();
        assert_eq!(link.tag, Tag::Anchor);
        assert_eq!(link.get_attr("href"), Some("https://zoom.example.com"));
        assert_eq!(link.get_attr("target"), Some("_blank"));
        assert_eq!(link.get_attr("rel"), Some("noopener noreferrer"));
        assert_eq!(link.get_attr("aria-label"), Some("zoom, video calls"));
    }

    #[test]
    fn no_homepage_uses_plain_span_with_label() {
        let tree = render(&entry());
        let span = tree
            .find(&|el: &Element| el.get_attr("aria-label").is_some())
            .unwrap();
        assert_eq!(span.tag, Tag::Span);
        assert_eq!(span.get_attr("aria-label"), Some("zoom, video calls"));
        assert!(tree.find_all(Tag::Anchor).is_empty());
    }

    #[test]
    fn error_replaces_description_and_relabels_button() {
        let mut e = entry();
        e.error = Some("network failure".into());
        let tree = render(&e);
        let description = tree
            .find(&|el: &Element| el.has_class("description"))
            .unwrap();
        assert!(description.has_class("error-text"));
        assert_eq!(description.text_content(), "network failure");
        assert_eq!(action_button(&tree).text_content(), "Try Again");
        assert!(tree.find_by_id("marketplace-plugin-zoom").unwrap().has_class("item-error"));
    }

    #[test]
    fn configure_links_to_admin_page() {
        let mut e = entry();
        e.installed = InstallState::Installed("1.4.0".into());
        let tree = render(&e);
        let link = tree.find_all(Tag::RouterLink);
        assert_eq!(link.len(), 1);
        assert_eq!(link[0].get_attr("to"), Some("/admin_console/plugins/plugin_zoom"));
        assert_eq!(action_button(&tree).click(), Some(Gesture::Configure));
    }

    #[test]
    fn installing_shows_spinner_and_disables_button() {
        let mut e = entry();
        e.installing = true;
        let tree = render(&e);
        let button = action_button(&tree);
        assert!(button.disabled);
        assert_eq!(button.click(), None);
        assert_eq!(tree.find_all(Tag::Spinner).len(), 1);
        assert_eq!(button.text_content(), "Installing...");
    }

    #[test]
    fn empty_download_url_disables_install() {
        let mut e = entry();
        e.download_url = None;
        let tree = render(&e);
        assert!(action_button(&tree).disabled);
    }

    #[test]
    fn update_prompt_links_release_notes() {
        let mut e = entry();
        e.installed = InstallState::Installed("1.3.0".into());
        e.release_notes_url = Some("https://example.com/notes".into());
        let tree = render(&e);
        let update = tree.find(&|el: &Element| el.has_class("update")).unwrap();
        assert_eq!(update.text_content(), "Update available: 1.4.0 - Update");
        let notes = tree
            .find(&|el: &Element| el.get_attr("href") == Some("https://example.com/notes"))
            .unwrap();
        assert_eq!(notes.text_content(), "1.4.0");
        let action = tree
            .find(&|el: &Element| el.has_class("update-action"))
            .unwrap();
        assert_eq!(action.click(), Some(Gesture::Update));
    }

    #[test]
    fn update_prompt_without_release_notes_is_plain_text() {
        let mut e = entry();
        e.installed = InstallState::Installed("1.3.0".into());
        let tree = render(&e);
        let update = tree.find(&|el: &Element| el.has_class("update")).unwrap();
        assert_eq!(update.children[1], Node::Text("1.4.0".into()));
    }
}
