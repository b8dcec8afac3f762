use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::{ASCII_FULL, UTF8_FULL},
};

/// How tables are drawn
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    /// Plain ASCII borders, for chat messages where box-drawing glyphs misalign
    pub(crate) ascii: bool,
}

impl TableOptions {
    pub(crate) fn chat() -> Self {
        Self {
            use_color: false,
            ascii: true,
        }
    }
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn label_cell(text: &str, use_color: bool) -> Cell {
    let cell = Cell::new(text);
    if use_color { cell.fg(Color::Yellow) } else { cell }
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

pub(super) fn create_styled_table(opts: TableOptions) -> Table {
    let mut table = Table::new();
    if opts.ascii {
        table
            .load_preset(ASCII_FULL)
            .set_content_arrangement(ContentArrangement::Disabled);
    } else {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_SOLID_INNER_BORDERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        normalize_header_separator(&mut table);
    }
    table
}
