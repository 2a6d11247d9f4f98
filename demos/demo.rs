use queryhaus::prelude::*;
use serde_json::{json, Value};

fn seed_members() -> Vec<Value> {
    (0..100)
        .map(|i| {
            json!({
                "member_id": i as i64,
                "username": format!("member{}", i),
                "age": i as i64,
                "team_id": (i % 2) as i64,
                "team_name": if i % 2 == 0 { "teamA" } else { "teamB" },
            })
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("🚀 Queryhaus Demo\n");

    let searcher = Searcher::new(
        MemoryPort::new(seed_members()),
        Projection::new(["member_id", "username", "age", "team_id", "team_name"]),
    );
    println!("✅ Searcher ready over 100 seeded members");

    // Sparse filter: absent fields are omitted from the composed predicate
    let filter = FilterSpec::new()
        .text_eq("username", None)
        .text_eq("team_name", Some("teamB"))
        .range("age", Some(35), Some(40));
    let order = OrderSpec::new().desc("age").asc("username");

    let found = searcher.search(&filter, &order).await?;
    println!("\n🔎 Unpaginated search: {} members on teamB aged 35-40", found.len());
    for row in &found {
        println!("   {} (age {})", row["username"], row["age"]);
    }

    // Adaptive pagination: the underfilled page proves the total,
    // so no count query is issued
    let page = searcher
        .search_page_adaptive(&filter, &order, PageWindow::first(10)?)
        .await?;
    println!(
        "\n📄 Adaptive page: {} of {} (count queries issued: {})",
        page.len(),
        page.total(),
        searcher.port().count_calls()
    );

    // A full page cannot prove the total, so the count query fires
    searcher.port().reset_calls();
    let page = searcher
        .search_page_adaptive(&FilterSpec::new(), &OrderSpec::new().asc("member_id"), PageWindow::first(10)?)
        .await?;
    println!(
        "📄 Adaptive page over all members: {} of {} (count queries issued: {})",
        page.len(),
        page.total(),
        searcher.port().count_calls()
    );

    println!("\n✅ Done");
    Ok(())
}
