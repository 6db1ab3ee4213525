//! Offline adjacency construction from chunk partitions.
//!
//! Lets the traversal run against the chunked dataset on disk when no
//! graph store is available, using the in-memory engine.

use moviechain_core::{ChainError, ChainResult, LocalGraph};

use crate::chunk::partition_files;
use crate::dataset::MovieRow;
use crate::IngestConfig;

/// Build an in-memory movie–actor graph from every partition file.
pub fn build_local_graph(config: &IngestConfig) -> ChainResult<LocalGraph> {
    let files = partition_files(config)?;
    if files.is_empty() {
        return Err(ChainError::format(format!(
            "no partition files in {}; run the chunk stage first",
            config.data_dir.display()
        )));
    }

    let mut graph = LocalGraph::new();
    for file in files {
        let mut reader = csv::Reader::from_path(&file)?;
        for result in reader.deserialize::<MovieRow>() {
            let row: MovieRow = result?;
            graph.add_movie(row.to_movie());
            for name in row.cast_names() {
                graph.add_credit(row.id, &name);
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::chunk;
    use moviechain_core::PathEntity;
    use std::fs;
    use std::io::Write;

    #[test]
    fn chunked_dataset_round_trips_into_traversable_graph() {
        let dir = tempfile::tempdir().unwrap();
        let config = IngestConfig::with_data_dir(dir.path());

        // Heat and The Irishman share De Niro; The Irishman and
        // Inception do not connect.
        let mut f = fs::File::create(config.raw_csv_path()).unwrap();
        f.write_all(
            b"id,title,release_date,overview,popularity,genres,poster_path,cast\n\
              1,Heat,1995-12-15,Two cops.,42.5,Crime,/h.jpg,\"Al Pacino, Robert De Niro\"\n\
              2,The Irishman,2019-11-01,A hitman.,55.0,Crime,/i.jpg,\"Robert De Niro, Joe Pesci\"\n\
              3,Inception,2010-07-15,A dream heist.,80.1,Sci-Fi,/n.jpg,\"Leonardo DiCaprio\"\n",
        )
        .unwrap();

        chunk(&config).unwrap();
        let graph = build_local_graph(&config).unwrap();

        assert_eq!(graph.movie_count(), 3);
        assert_eq!(graph.actor_count(), 4);
        assert_eq!(graph.credit_count(), 5);

        let paths = graph.find_paths("Heat", 3, None).unwrap();
        let reaches_irishman = paths.iter().any(|p| {
            p.entities.iter().any(
                |e| matches!(e, PathEntity::Movie { title, .. } if title == "The Irishman"),
            )
        });
        assert!(reaches_irishman);

        let reaches_inception = paths.iter().any(|p| {
            p.entities
                .iter()
                .any(|e| matches!(e, PathEntity::Movie { title, .. } if title == "Inception"))
        });
        assert!(!reaches_inception);
    }
}
