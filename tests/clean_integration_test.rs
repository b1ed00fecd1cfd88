use lead_clean::{CleanEngine, CleanError, CleanPipeline, CliConfig, LocalStorage};
use tempfile::TempDir;

fn config_for(input: &str, output: &str) -> CliConfig {
    CliConfig {
        input: input.to_string(),
        output: output.to_string(),
        phone_col: "phone".to_string(),
        country: "+1".to_string(),
        max: 0,
        phones_only: false,
        verbose: false,
        monitor: false,
    }
}

fn read_csv(path: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(|v| v.to_string()).collect())
        .collect()
}

#[tokio::test]
async fn test_end_to_end_cleaning() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("leads.csv");
    let output_path = temp_dir.path().join("out").join("cleaned.csv");

    std::fs::write(
        &input_path,
        "name,phone,city\n\
         Ann,555-123-4567,Austin\n\
         Bob,,Boston\n\
         Cid,(555) 123-4567,Chicago\n\
         Dee,123,Dallas\n\
         Eve,+44 20 7946 0958,Exeter\n",
    )
    .unwrap();

    let config = config_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CleanPipeline::new(storage, config);
    let engine = CleanEngine::new(pipeline);

    let result_path = engine.run().await.unwrap();
    assert_eq!(result_path, output_path.to_str().unwrap());

    let rows = read_csv(output_path.to_str().unwrap());

    // header 保留原欄位並附加 _clean_phone
    assert_eq!(rows[0], vec!["name", "phone", "city", "_clean_phone"]);

    // Bob (empty), Cid (duplicate of Ann) and Dee (too short) are rejected
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[1],
        vec!["Ann", "555-123-4567", "Austin", "+15551234567"]
    );
    assert_eq!(
        rows[2],
        vec!["Eve", "+44 20 7946 0958", "Exeter", "+442079460958"]
    );
}

#[tokio::test]
async fn test_end_to_end_with_phones_only_output() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("leads.csv");
    let output_path = temp_dir.path().join("cleaned.csv");

    std::fs::write(
        &input_path,
        "name,phone\nAnn,555-123-4567\nBob,555-987-6543\n",
    )
    .unwrap();

    let mut config = config_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    config.phones_only = true;

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CleanPipeline::new(storage, config);
    let engine = CleanEngine::new(pipeline);

    engine.run().await.unwrap();

    let phones_path = temp_dir.path().join("cleaned-phones.csv");
    assert!(phones_path.exists());

    let rows = read_csv(phones_path.to_str().unwrap());
    assert_eq!(rows[0], vec!["phone"]);
    assert_eq!(rows[1], vec!["+15551234567"]);
    assert_eq!(rows[2], vec!["+15559876543"]);
}

#[tokio::test]
async fn test_max_rows_caps_output() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("leads.csv");
    let output_path = temp_dir.path().join("cleaned.csv");

    let mut csv_content = String::from("name,phone\n");
    for i in 0..10 {
        csv_content.push_str(&format!("Lead {},555-123-45{:02}\n", i, i));
    }
    std::fs::write(&input_path, csv_content).unwrap();

    let mut config = config_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    config.max = 3;

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CleanPipeline::new(storage, config);
    let engine = CleanEngine::new(pipeline);

    engine.run().await.unwrap();

    let rows = read_csv(output_path.to_str().unwrap());
    assert_eq!(rows.len(), 4); // header + 3 rows
    assert_eq!(rows[1][0], "Lead 0");
    assert_eq!(rows[3][0], "Lead 2");
}

#[tokio::test]
async fn test_missing_input_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("does-not-exist.csv");
    let output_path = temp_dir.path().join("cleaned.csv");

    let config = config_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CleanPipeline::new(storage, config);
    let engine = CleanEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, CleanError::InputNotFound { .. }));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_missing_column_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("leads.csv");
    let output_path = temp_dir.path().join("cleaned.csv");

    std::fs::write(&input_path, "name,mobile\nAnn,555-123-4567\n").unwrap();

    let config = config_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CleanPipeline::new(storage, config);
    let engine = CleanEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();
    match err {
        CleanError::ColumnNotFound { column, available } => {
            assert_eq!(column, "phone");
            assert_eq!(available, vec!["name", "mobile"]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!output_path.exists());
}

#[tokio::test]
async fn test_case_insensitive_column_match() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("leads.csv");
    let output_path = temp_dir.path().join("cleaned.csv");

    std::fs::write(&input_path, "Name,PHONE \nAnn,555-123-4567\n").unwrap();

    let mut config = config_for(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    );
    config.phone_col = "Phone".to_string();

    let storage = LocalStorage::new(".".to_string());
    let pipeline = CleanPipeline::new(storage, config);
    let engine = CleanEngine::new(pipeline);

    engine.run().await.unwrap();

    let rows = read_csv(output_path.to_str().unwrap());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][2], "+15551234567");
}
