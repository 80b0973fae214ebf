use crate::core::{ItemFilter, SqliteStore};
use crate::errors::{AppError, AppResult};
use crate::i18n::Texts;
use crate::models::Group;
use crate::utils::colors::{GREY, RESET, color_for_status, colorize_optional};
use crate::utils::formatting::{bold, italic, priority_badge, truncate};
use crate::utils::table::{Column, Table};

const LINK_WIDTH: usize = 48;
const HINT_WIDTH: usize = 80;

pub struct ListLogic;

impl ListLogic {
    /// Render the checklist, optionally limited to one group.
    pub fn render(
        store: &SqliteStore,
        texts: &Texts,
        only_group: Option<&str>,
        filter: &ItemFilter,
        separator: &str,
    ) -> AppResult<String> {
        let groups: Vec<&Group> = match only_group {
            Some(id) => vec![
                store
                    .group(id)
                    .ok_or_else(|| AppError::GroupNotFound(id.to_string()))?,
            ],
            None => store.groups().iter().collect(),
        };

        let total = store.total_items();
        let mut out = String::new();
        out.push_str(&format!("{}\n", bold(texts.title)));
        out.push_str(&format!("{}\n\n", texts.items_count(total)));

        if total > 0 {
            out.push_str(&format!("{}\n", italic(texts.view_hint_title)));
            for line in textwrap::wrap(texts.view_hint, HINT_WIDTH) {
                out.push_str(&format!("{GREY}{line}{RESET}\n"));
            }
            out.push('\n');
        }

        for group in groups {
            out.push_str(&Self::render_group(store, texts, group, filter, separator));
            out.push('\n');
        }

        Ok(out)
    }

    fn render_group(
        store: &SqliteStore,
        texts: &Texts,
        group: &Group,
        filter: &ItemFilter,
        separator: &str,
    ) -> String {
        let progress = store.progress(group);
        let title = format!(
            "{}  {} [{}]  {}/{} ✓  {} ✗",
            group.icon_type.glyph(),
            bold(texts.group_name(group)),
            group.id,
            progress.done,
            progress.total,
            progress.skipped
        );

        let mut out = format!("{title}\n{}\n", separator.repeat(HINT_WIDTH));

        if group.items.is_empty() {
            out.push_str(&format!("{GREY}{}{RESET}\n", italic(texts.no_items)));
            return out;
        }

        let visible = filter.apply(&group.items);
        if visible.is_empty() {
            out.push_str(&format!("{GREY}{}{RESET}\n", italic(texts.no_matches)));
            return out;
        }

        let mut table = Table::new(vec![
            Column::new(""),
            Column::new("ID"),
            Column::new("NAME"),
            Column::new("PRIORITY"),
            Column::new("LINK"),
        ]);

        for item in visible {
            let status = store.status_of(&item.id);
            table.add_row(vec![
                format!("{}{}{}", color_for_status(status), status.mark(), RESET),
                item.id.clone(),
                format!("{}{}{}", color_for_status(status), item.name, RESET),
                priority_badge(texts, item.priority),
                colorize_optional(&truncate(&item.link, LINK_WIDTH)),
            ]);
        }

        out.push_str(&table.render());
        out
    }

    /// One line per group: id, name, icon, item count, default flag.
    pub fn render_groups(store: &SqliteStore, texts: &Texts) -> String {
        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("NAME"),
            Column::new("ICON"),
            Column::new("ITEMS"),
            Column::new("DEFAULT"),
        ]);

        for group in store.groups() {
            table.add_row(vec![
                group.id.clone(),
                texts.group_name(group).to_string(),
                group.icon_type.as_str().to_string(),
                group.items.len().to_string(),
                if group.is_default { "yes" } else { "" }.to_string(),
            ]);
        }

        table.render()
    }
}
