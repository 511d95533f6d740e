use boardgen::core::Pipeline;
use boardgen::{BoardGenError, BoardPipeline, CliConfig, GenEngine, LocalStorage};
use std::fs;
use tempfile::TempDir;

fn generate(content: &str, array_name: &str) -> boardgen::Result<String> {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("TestBoard.csv"), content).unwrap();

    let config = CliConfig {
        board_path: "TestBoard.csv".to_string(),
        array_name: array_name.to_string(),
        verbose: false,
    };
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let pipeline = BoardPipeline::new(storage, config);

    GenEngine::new(pipeline).run()
}

#[test]
fn test_end_to_end_board_generation() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("TestBoard.csv"), "1,2,3\n4,5,6\n").unwrap();

    let config = CliConfig {
        board_path: "TestBoard.csv".to_string(),
        array_name: "PIECES".to_string(),
        verbose: false,
    };
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let pipeline = BoardPipeline::new(storage, config);
    let engine = GenEngine::new(pipeline);

    let source = engine.run().unwrap();

    let expected = concat!(
        "        private static readonly int[,] PIECES = {\n",
        "            {4, 1},\n",
        "            {5, 2},\n",
        "            {6, 3},\n",
        "        };",
    );
    assert_eq!(source, expected);
}

#[test]
fn test_empty_board_file() {
    let source = generate("", "PIECES").unwrap();

    let expected = concat!(
        "        private static readonly int[,] PIECES = {\n",
        "        };",
    );
    assert_eq!(source, expected);
    assert_eq!(source.lines().count(), 2);
}

#[test]
fn test_blank_lines_are_skipped() {
    let with_blanks = generate("1,2\n\n3,4\n\n", "PIECES").unwrap();
    let without_blanks = generate("1,2\n3,4\n", "PIECES").unwrap();
    assert_eq!(with_blanks, without_blanks);
}

#[test]
fn test_non_numeric_field_fails_before_output() {
    let result = generate("a,b\n", "PIECES");
    match result {
        Err(BoardGenError::PieceParseError { row, column, value }) => {
            assert_eq!(row, 1);
            assert_eq!(column, 1);
            assert_eq!(value, "a");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_jagged_board_is_rejected() {
    let result = generate("1,2,3\n4,5\n", "PIECES");
    assert!(matches!(
        result,
        Err(BoardGenError::JaggedBoardError {
            row: 2,
            expected: 3,
            actual: 2,
        })
    ));
}

#[test]
fn test_missing_board_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = CliConfig {
        board_path: "TestBoard.csv".to_string(),
        array_name: "PIECES".to_string(),
        verbose: false,
    };
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let pipeline = BoardPipeline::new(storage, config);

    let result = GenEngine::new(pipeline).run();
    assert!(matches!(result, Err(BoardGenError::IoError(_))));
}

#[test]
fn test_custom_array_name() {
    let source = generate("7\n", "TEST_PIECES").unwrap();
    assert!(source.starts_with("        private static readonly int[,] TEST_PIECES = {"));
}

#[test]
fn test_loader_round_trip() {
    let board = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    let content = board
        .iter()
        .map(|row| {
            row.iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("TestBoard.csv"), content).unwrap();

    let config = CliConfig {
        board_path: "TestBoard.csv".to_string(),
        array_name: "PIECES".to_string(),
        verbose: false,
    };
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let pipeline = BoardPipeline::new(storage, config);

    assert_eq!(pipeline.extract().unwrap(), board);
}
