use ledger_client::{
    ApiClient, Exporter, GateDecision, Money, RecordDraft, RecordKind, Repository, Session,
    aggregate,
};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (settings, command) = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "borsello={level},ledger_client={level}",
            level = settings.level
        ))
        .init();

    tracing::debug!("using ledger service at {}", settings.base_url);

    let session = Session::new();
    let api = ApiClient::new(reqwest::Client::new(), settings.base_url.clone());

    if !settings.email.is_empty() && !settings.password.is_empty() {
        let token = api.login(&settings.email, &settings.password).await?;
        session.set_token(token);
    }

    // Every command below is a protected entry point; the gate is evaluated
    // here, not once at startup.
    if session.require_authenticated() == GateDecision::RedirectToLogin {
        eprintln!("login required: set email and password in the config file or BORSELLO_* environment");
        std::process::exit(1);
    }

    match command {
        settings::Command::Summary => summary(&api, &session).await?,
        settings::Command::Add {
            kind,
            amount,
            label,
            icon,
        } => add(&api, &session, &kind, &amount, &label, icon).await?,
        settings::Command::Delete { kind, id } => {
            let kind: RecordKind = kind.parse()?;
            let repo = Repository::new(kind, api, session);
            repo.remove(&id).await?;
            println!("deleted {id} ({kind})");
        }
        settings::Command::Export { kind, out } => {
            let kind: RecordKind = kind.parse()?;
            let exporter = Exporter::new(api, session);
            let file = exporter.export_file(kind).await?;
            let path = out.unwrap_or_else(|| file.filename.to_string());
            std::fs::write(&path, &file.bytes)?;
            println!("saved {} ({} bytes)", path, file.bytes.len());
        }
    }

    Ok(())
}

async fn summary(
    api: &ApiClient,
    session: &Session,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let income = Repository::new(RecordKind::Income, api.clone(), session.clone());
    let expense = Repository::new(RecordKind::Expense, api.clone(), session.clone());

    // Different kinds are independent and may be fetched concurrently.
    let (income_cache, expense_cache) = tokio::try_join!(income.list(), expense.list())?;

    println!("Total income:  {}", aggregate::total_amount(&income_cache));
    println!("Total expense: {}", aggregate::total_amount(&expense_cache));
    println!(
        "Net balance:   {}",
        aggregate::net_balance(&income_cache, &expense_cache)
    );

    for (kind, cache) in [
        (RecordKind::Income, &income_cache),
        (RecordKind::Expense, &expense_cache),
    ] {
        println!("\n{kind}:");
        if cache.is_empty() {
            println!("  (none)");
            continue;
        }
        for point in aggregate::series(cache) {
            println!("  {:>8}  {}", point.label, point.amount);
        }
    }

    Ok(())
}

async fn add(
    api: &ApiClient,
    session: &Session,
    kind: &str,
    amount: &str,
    label: &str,
    icon: Option<String>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let kind: RecordKind = kind.parse()?;
    let amount: Money = amount.parse()?;

    // Draft validation is the caller's job, and here the CLI is the caller.
    if amount.is_negative() {
        return Err("amount must be non-negative".into());
    }
    if label.trim().is_empty() {
        return Err("label must not be empty".into());
    }

    let mut draft = RecordDraft::new(amount, label);
    if let Some(icon) = icon {
        draft = draft.with_icon(icon);
    }

    let repo = Repository::new(kind, api.clone(), session.clone());
    repo.create(draft).await?;

    let cache = repo.snapshot();
    println!(
        "added {label} {amount}; {kind} now has {} records totalling {}",
        cache.len(),
        aggregate::total_amount(&cache)
    );
    Ok(())
}
