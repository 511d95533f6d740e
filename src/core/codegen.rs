use crate::core::Grid;

const INDENT: &str = "    ";

pub fn render_csharp_array(board: &Grid, array_name: &str) -> String {
    let mut code = format!(
        "{}{}private static readonly int[,] {} = {{\n",
        INDENT, INDENT, array_name
    );

    for row in board {
        let cells = row
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        code.push_str(&format!("{}{}{}{{{}}},\n", INDENT, INDENT, INDENT, cells));
    }

    code.push_str(&format!("{}{}}};", INDENT, INDENT));
    code
}
