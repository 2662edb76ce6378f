use std::{
    fmt::{Display, Write},
    fs::{self, File, OpenOptions},
    io,
    path::Path,
};

use ord_table::{iterators::Relation, OrdTable, TableKey};

use crate::*;

fn escape(text: &str) -> String {
    // these characters need to be escaped, do "&" first
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// create the SVG code
pub(crate) fn gen_svg(layout: &TreeLayout) -> String {
    let mut s = String::new();

    // background
    let _ = writeln!(
        s,
        "<rect fill=\"#000\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>",
        -PAD,
        -PAD,
        layout.tot_wx + 2 * PAD,
        layout.tot_wy + 2 * PAD
    );

    // edges first so that the boxes go over their ends
    for (parent, child, relation) in &layout.edges {
        let o = layout.nodes[*parent].output_point;
        let i = layout.nodes[*child].input_point;
        let color = match relation {
            Relation::Left => COLORS[layout.depths[*parent] % COLORS.len()],
            _ => COLORS[(layout.depths[*parent] + 3) % COLORS.len()],
        };
        let p = NODE_PAD / 2;
        let _ = writeln!(
            s,
            "<path stroke=\"#{}\" stroke-width=\"{}\" fill=\"#0000\" d=\"M {},{} C {},{} {},{} \
             {},{}\"/>",
            color,
            RELATION_WIDTH,
            o.0,
            o.1,
            o.0,
            o.1 + p,
            i.0,
            i.1 - p,
            i.0,
            i.1
        );
    }

    for node in &layout.nodes {
        for rect in &node.rects {
            let _ = writeln!(
                s,
                "<rect fill=\"#{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>",
                NODE_FILL, rect.0, rect.1, rect.2, rect.3
            );
        }
    }

    // text last
    for node in &layout.nodes {
        for tmp in &node.text {
            let _ = writeln!(
                s,
                "<text fill=\"#{}\" font-size=\"{}\" font-family=\"{}\" x=\"{}\" y=\"{}\" \
                 textLength=\"{}\">{}</text>",
                TEXT_COLOR,
                tmp.1,
                FONT_FAMILY,
                tmp.0 .0,
                tmp.0 .1,
                tmp.2,
                escape(&tmp.3)
            );
        }
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
        <!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \
        \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n\
        <svg preserveAspectRatio=\"meet\" viewBox=\"{} {} {} {}\" width=\"100%\" height=\"100%\" \
        version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">\n\
        {}\
        </svg>",
        -PAD,
        -PAD,
        layout.tot_wx + 2 * PAD,
        layout.tot_wy + 2 * PAD,
        s,
    )
}

/// Renders an SVG image of the tree shape of `table`. Each node shows its key
/// and subtree size, edges to left children and right children have
/// different colors. An empty table gives an image with only a background.
///
/// ```
/// use ord_table::OrdTable;
///
/// let t: OrdTable<u32, ()> = [(2, ()), (1, ()), (3, ())].into_iter().collect();
/// let svg = ord_table_render::render_to_svg(&t);
/// assert!(svg.starts_with("<?xml"));
/// assert_eq!(svg.matches("<path").count(), 2);
/// ```
pub fn render_to_svg<K: TableKey + Display, V>(table: &OrdTable<K, V>) -> String {
    gen_svg(&TreeLayout::new(table))
}

/// Writes the result of [render_to_svg] to `out_file`, replacing any existing
/// file
pub fn render_to_svg_file<K: TableKey + Display, V>(
    table: &OrdTable<K, V>,
    out_file: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let out_file = out_file.as_ref();
    let s = render_to_svg(table);
    drop(fs::remove_file(out_file));
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(out_file)?;
    // avoid trait collision
    <File as io::Write>::write_all(&mut file, s.as_bytes())?;
    tracing::debug!(path = %out_file.display(), len = table.len(), "rendered table");
    Ok(())
}
