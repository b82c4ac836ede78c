use coursefinder_core::{Catalog, Config};
use serde::Serialize;

#[derive(Serialize)]
struct Recommendation<'a> {
    name: &'a str,
    score: f32,
    url: &'a str,
}

pub fn run(config: &Config, name: &str, k: Option<usize>, json: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(config)?;
    let k = k.unwrap_or(config.default_k);
    let recs = recommendations(&catalog, name, k);

    if json {
        println!("{}", serde_json::to_string_pretty(&recs)?);
        return Ok(());
    }
    for (rank, rec) in recs.iter().enumerate() {
        println!("{}. {} ({:.3})", rank + 1, rec.name, rec.score);
    }
    Ok(())
}

fn recommendations<'a>(catalog: &'a Catalog, name: &str, k: usize) -> Vec<Recommendation<'a>> {
    catalog
        .recommend_scored(name, k)
        .into_iter()
        .filter_map(|(j, score)| {
            catalog.item_at(j).map(|item| Recommendation {
                name: &item.name,
                score,
                url: &item.url,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursefinder_core::{Item, SimilarityMatrix};

    fn item(name: &str) -> Item {
        Item {
            name: name.to_string(),
            institution: String::new(),
            difficulty: "Beginner".to_string(),
            rating: None,
            url: format!("https://example.org/{name}"),
            description: String::new(),
            skills: String::new(),
        }
    }

    #[test]
    fn test_recommendations_carry_scores() {
        let matrix = SimilarityMatrix::from_raw(2, vec![1.0, 0.5, 0.5, 1.0]).unwrap();
        let catalog = Catalog::new(vec![item("a"), item("b")], matrix).unwrap();
        let recs = recommendations(&catalog, "A", 6);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "b");
        assert_eq!(recs[0].score, 0.5);
        let json = serde_json::to_value(&recs).unwrap();
        assert_eq!(json[0]["url"], "https://example.org/b");
    }
}
