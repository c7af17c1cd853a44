use es_bridge::client::es::EsClient;
use es_bridge::index::loader::fill_index;
use es_bridge::index::mapping::create_index;
use es_bridge::index::types::Schema;
use es_bridge::search::engine::{get_all_docs, multi_search};
use es_bridge::search::types::{ConditionValue, FieldValue};
use es_bridge::table::reader::{read_table_file, read_type_tags_file};
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{}", message);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    let index = cli.index.expect("--index is required");
    let data_path = cli.data_path.expect("--data is required");
    let schema_path = cli.schema_path.expect("--schema is required");
    let indices_to_delete = cli.indices_to_delete;

    let es_url = std::env::var("ES_URL").unwrap_or_else(|_| "http://127.0.0.1:9200".to_string());
    let client = EsClient::new(&es_url);
    tracing::info!("Using cluster at {}", es_url);

    // 1. Read the table and its schema file; pair columns with type tags:
    let table = read_table_file(&data_path)?;
    let type_tags = read_type_tags_file(&schema_path)?;
    let schema = Schema::from_columns(&table.columns, &type_tags);

    // 2. List the index and all of its documents, if it exists:
    if client.index_exists(&index).await? {
        tracing::info!("Listing existing index `{}`", index);
        let mapping = client.get_index_mapping(&index).await?;
        println!("{}\n", mapping["properties"]);

        let all_docs = get_all_docs(&client, &index).await?;
        println!("There are {} documents found.\n", all_docs.len());
        println!("all documents:");
        for doc in &all_docs {
            println!("\n{}", doc);
        }
        println!();
    } else {
        tracing::info!("The index `{}` does not exist yet", index);
    }

    // 3. Create and fill the index on first run, search on later runs:
    if !client.index_exists(&index).await? {
        tracing::info!("Creating index `{}`", index);
        create_index(&client, &index, &schema).await?;

        tracing::info!("Filling data into `{}`", index);
        fill_index(&client, &index, &table).await?;
        tracing::info!("Successfully prepared all data");
    } else {
        tracing::info!("Index `{}` already exists, searching instead", index);

        let conditions = vec![
            (
                "name".to_string(),
                ConditionValue::Many(vec![FieldValue::text("Ann"), FieldValue::text("Bo")]),
            ),
            (
                "age".to_string(),
                ConditionValue::Many(vec![FieldValue::Int(22), FieldValue::Int(21)]),
            ),
        ];

        if let Some(matched) = multi_search(&client, &index, &schema, &conditions).await? {
            println!("num. of matched records: {}", matched.len());
            println!("matched records:");
            for record in &matched {
                println!("\n{}", record);
            }
            println!();
        }
    }

    // 4. Interactive deletion of the requested indices:
    let existing = client.list_indices("*").await?;
    tracing::info!("Existing indices: {:?}", existing);

    for candidate in &indices_to_delete {
        if !client.index_exists(candidate).await? {
            tracing::warn!("Index `{}` does not exist", candidate);
            continue;
        }

        let mapping = client.get_index_mapping(candidate).await?;
        println!("Index `{}` mapping:\n{}\n", candidate, mapping["properties"]);

        match prompt_deletion(candidate)? {
            Answer::Yes => {
                client.delete_index(candidate).await?;
                tracing::info!("Deleted index `{}`", candidate);
            }
            Answer::No => continue,
            // `q` or unrecognized input stops the whole deletion pass,
            // not just the current index.
            Answer::Quit => {
                tracing::info!("Stopping deletion process");
                break;
            }
            Answer::Invalid => {
                tracing::warn!("Input is invalid, stopping deletion process");
                break;
            }
        }
    }

    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    index: Option<String>,
    data_path: Option<String>,
    schema_path: Option<String>,
    indices_to_delete: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--index" => {
                cli.index = Some(flag_value(args, i)?);
                i += 2;
            }
            "--data" => {
                cli.data_path = Some(flag_value(args, i)?);
                i += 2;
            }
            "--schema" => {
                cli.schema_path = Some(flag_value(args, i)?);
                i += 2;
            }
            "--delete" => {
                cli.indices_to_delete.push(flag_value(args, i)?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok(cli)
}

fn flag_value(args: &[String], i: usize) -> Result<String, String> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| format!("Missing value for {}", args[i]))
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} --index <name> --data <csv> --schema <csv> [--delete <name>]...",
        program
    );
    eprintln!(
        "Example: {} --index school_members --data res/students.csv --schema res/index_schema.csv",
        program
    );
}

enum Answer {
    Yes,
    No,
    Quit,
    Invalid,
}

fn prompt_deletion(index: &str) -> anyhow::Result<Answer> {
    print!(
        "Do you want to delete index `{}`?\nPress q to quit.\n(y/n): ",
        index
    );
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    Ok(match line.trim().to_lowercase().as_str() {
        "y" => Answer::Yes,
        "n" => Answer::No,
        "q" => Answer::Quit,
        _ => Answer::Invalid,
    })
}
