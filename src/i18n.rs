//! Static interface text in the two supported languages.

use crate::models::group::{DRIVERS_ID, EXTENSIONS_ID, PROGRAMS_ID};
use crate::models::{Group, Language, Priority};

pub struct Texts {
    pub title: &'static str,
    pub item_singular: &'static str,
    pub item_plural: &'static str,
    pub programs: &'static str,
    pub drivers: &'static str,
    pub extensions: &'static str,
    pub no_items: &'static str,
    pub no_matches: &'static str,
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
    pub view_hint_title: &'static str,
    pub view_hint: &'static str,
    pub export_success: &'static str,
    pub export_empty: &'static str,
    pub import_success: &'static str,
    pub import_legacy: &'static str,
    pub import_error: &'static str,
    pub clear_confirm: &'static str,
    pub clear_done: &'static str,
    pub delete_group_confirm: &'static str,
    pub protected_group: &'static str,
    pub empty_name: &'static str,
    pub cancelled: &'static str,
    pub group_created: &'static str,
    pub group_deleted: &'static str,
    pub item_added: &'static str,
    pub item_updated: &'static str,
    pub item_deleted: &'static str,
    pub item_moved: &'static str,
    pub same_group: &'static str,
    pub target_not_found: &'static str,
    pub language_current: &'static str,
    pub language_set: &'static str,
    pub legacy_upgraded: &'static str,
    pub root_unreadable: &'static str,
    pub statuses_partial: &'static str,
    pub statuses_unreadable: &'static str,
    pub backup_created: &'static str,
}

static PT: Texts = Texts {
    title: "RED DEATH PROTOCOL",
    item_singular: "item cadastrado",
    item_plural: "itens cadastrados",
    programs: "Programas",
    drivers: "Drivers",
    extensions: "Extensões",
    no_items: "Nenhum item adicionado",
    no_matches: "Nenhum item encontrado",
    high: "ALTO",
    medium: "MÉDIO",
    low: "BAIXO",
    view_hint_title: "Modo de visualização ativo",
    view_hint: "Use `pcdeath status <ITEM>` para marcar como concluído (✓), ignorado (✗) ou limpar a marcação.",
    export_success: "Exportado com sucesso",
    export_empty: "Nenhum item cadastrado. Nada para exportar.",
    import_success: "Importado com sucesso",
    import_legacy: "Formato antigo detectado e convertido",
    import_error: "Erro ao importar: arquivo inválido",
    clear_confirm: "Tem certeza que deseja limpar todas as listas?",
    clear_done: "Todas as listas foram limpas",
    delete_group_confirm: "Excluir o grupo e todos os seus itens?",
    protected_group: "Grupos padrão não podem ser excluídos",
    empty_name: "O nome não pode ficar vazio. Nada foi alterado.",
    cancelled: "Operação cancelada.",
    group_created: "Grupo criado",
    group_deleted: "Grupo excluído",
    item_added: "Item adicionado",
    item_updated: "Item atualizado",
    item_deleted: "Item excluído",
    item_moved: "Item movido para",
    same_group: "O item já está nesse grupo. Nada a fazer.",
    target_not_found: "Grupo de destino não encontrado. Nada foi movido.",
    language_current: "Idioma",
    language_set: "Idioma alterado para",
    legacy_upgraded: "Formato antigo detectado: convertido em grupos.",
    root_unreadable: "A lista salva não pôde ser lida; usando os grupos padrão vazios",
    statuses_partial: "Marcações salvas inválidas foram ignoradas",
    statuses_unreadable: "As marcações salvas não puderam ser lidas; começando sem marcações",
    backup_created: "Backup criado",
};

static EN: Texts = Texts {
    title: "RED DEATH PROTOCOL",
    item_singular: "registered item",
    item_plural: "registered items",
    programs: "Programs",
    drivers: "Drivers",
    extensions: "Extensions",
    no_items: "No items added",
    no_matches: "No matching items",
    high: "HIGH",
    medium: "MEDIUM",
    low: "LOW",
    view_hint_title: "View mode active",
    view_hint: "Use `pcdeath status <ITEM>` to mark an item as done (✓), skipped (✗) or to clear the mark.",
    export_success: "Exported successfully",
    export_empty: "No registered items. Nothing to export.",
    import_success: "Imported successfully",
    import_legacy: "Old format detected and converted",
    import_error: "Import failed: invalid file",
    clear_confirm: "Are you sure you want to clear all lists?",
    clear_done: "All lists have been cleared",
    delete_group_confirm: "Delete the group and all of its items?",
    protected_group: "Default groups cannot be deleted",
    empty_name: "Name must not be empty. Nothing was changed.",
    cancelled: "Operation cancelled.",
    group_created: "Group created",
    group_deleted: "Group deleted",
    item_added: "Item added",
    item_updated: "Item updated",
    item_deleted: "Item deleted",
    item_moved: "Item moved to",
    same_group: "Item is already in that group. Nothing to do.",
    target_not_found: "Target group not found. Nothing was moved.",
    language_current: "Language",
    language_set: "Language set to",
    legacy_upgraded: "Old three-list format detected: converted to groups.",
    root_unreadable: "Stored checklist could not be read; starting from empty default groups",
    statuses_partial: "Invalid stored statuses were skipped",
    statuses_unreadable: "Stored statuses could not be read; starting with none marked",
    backup_created: "Backup created",
};

pub fn texts(lang: Language) -> &'static Texts {
    match lang {
        Language::Pt => &PT,
        Language::En => &EN,
    }
}

impl Texts {
    pub fn priority(&self, p: Priority) -> &'static str {
        match p {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    /// "1 registered item" / "3 registered items"
    pub fn items_count(&self, n: usize) -> String {
        let word = if n == 1 {
            self.item_singular
        } else {
            self.item_plural
        };
        format!("{n} {word}")
    }

    /// Default groups are shown in the active language, others as stored.
    pub fn group_name<'a>(&self, group: &'a Group) -> &'a str {
        if !group.is_default {
            return &group.name;
        }
        match group.id.as_str() {
            PROGRAMS_ID => self.programs,
            DRIVERS_ID => self.drivers,
            EXTENSIONS_ID => self.extensions,
            _ => &group.name,
        }
    }
}
