use std::sync::Arc;

use futures::future::try_join_all;
use semroute_shared::{Encoder, SimilarityError, Store, Utterance};
use serde::{Deserialize, Serialize};

use crate::error::RouterError;
use crate::linear;
use crate::scoring::Metric;

/// A named set of example utterances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
  pub name: String,
  pub utterances: Vec<Utterance>,
}

impl Route {
  pub fn new(
    name: impl Into<String>,
    utterances: impl IntoIterator<Item = impl Into<String>>,
  ) -> Self {
    Self {
      name: name.into(),
      utterances: utterances.into_iter().map(Utterance::new).collect(),
    }
  }
}

/// The route picked for a query, with its aggregate score.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
  pub route: String,
  pub score: f64,
}

/// Routes utterances to the best-matching [`Route`] by embedding similarity.
///
/// Build one with [`Router::builder`]; building encodes every example
/// utterance the store has not seen yet and caches it.
pub struct Router {
  routes: Vec<Route>,
  encoder: Arc<dyn Encoder>,
  store: Arc<dyn Store>,
  metrics: Vec<(Metric, f64)>,
}

impl std::fmt::Debug for Router {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Router")
      .field("routes", &self.routes)
      .field("metrics", &self.metrics)
      .finish_non_exhaustive()
  }
}

impl Router {
  pub fn builder() -> RouterBuilder {
    RouterBuilder::default()
  }

  /// All configured routes.
  pub fn routes(&self) -> &[Route] {
    &self.routes
  }

  /// Find the best route for `utterance`.
  ///
  /// Only scores above zero count as a match; if nothing qualifies the result
  /// is [`RouterError::NoRouteFound`].
  pub async fn best_match(&self, utterance: &str) -> Result<RouteMatch, RouterError> {
    let query = self.encode_query(utterance).await?;

    let mut best_score = 0.0;
    let mut best_route: Option<&str> = None;
    for route in &self.routes {
      for stored in &route.utterances {
        let Some(embedding) = self.stored_embedding(stored).await? else {
          continue;
        };
        let Some(score) = self.score(&query, &embedding)? else {
          continue;
        };
        tracing::debug!(route = %route.name, utterance = %stored.text, score, "scored");
        if score > best_score {
          best_score = score;
          best_route = Some(&route.name);
        }
      }
    }

    match best_route {
      Some(name) => Ok(RouteMatch {
        route: name.to_string(),
        score: best_score,
      }),
      None => Err(RouterError::NoRouteFound {
        utterance: utterance.to_string(),
      }),
    }
  }

  /// Score `utterance` against every stored example and return the best
  /// `top_k` routes, one entry per route, descending.
  pub async fn top_matches(
    &self,
    utterance: &str,
    top_k: usize,
  ) -> Result<Vec<RouteMatch>, RouterError> {
    let query = self.encode_query(utterance).await?;

    let mut names = Vec::new();
    let mut scores = Vec::new();
    for route in &self.routes {
      for stored in &route.utterances {
        let Some(embedding) = self.stored_embedding(stored).await? else {
          continue;
        };
        let Some(score) = self.score(&query, &embedding)? else {
          continue;
        };
        names.push(route.name.as_str());
        scores.push(score);
      }
    }

    let (top, indices) = linear::top_scores(&scores, scores.len());
    let mut matches: Vec<RouteMatch> = Vec::new();
    for (score, index) in top.into_iter().zip(indices) {
      if matches.len() == top_k {
        break;
      }
      let name = names[index];
      if matches.iter().any(|found| found.route == name) {
        continue;
      }
      matches.push(RouteMatch {
        route: name.to_string(),
        score,
      });
    }

    if matches.is_empty() {
      return Err(RouterError::NoRouteFound {
        utterance: utterance.to_string(),
      });
    }
    Ok(matches)
  }

  async fn encode_query(&self, utterance: &str) -> Result<Vec<f64>, RouterError> {
    self
      .encoder
      .encode(utterance)
      .await
      .map_err(|source| RouterError::Encode {
        utterance: utterance.to_string(),
        source,
      })
  }

  async fn stored_embedding(
    &self,
    utterance: &Utterance,
  ) -> Result<Option<Vec<f64>>, RouterError> {
    let embedding =
      self
        .store
        .get(&utterance.text)
        .await
        .map_err(|source| RouterError::Store {
          utterance: utterance.text.clone(),
          source,
        })?;
    if embedding.is_none() {
      tracing::warn!(utterance = %utterance.text, "embedding missing from store, skipping");
    }
    Ok(embedding)
  }

  /// Weighted mean across the configured metrics. `None` means the stored
  /// embedding cannot be compared and was skipped.
  fn score(&self, query: &[f64], embedding: &[f64]) -> Result<Option<f64>, RouterError> {
    if embedding.len() != query.len() {
      tracing::warn!(
        query_len = query.len(),
        embedding_len = embedding.len(),
        "embedding length mismatch, skipping"
      );
      return Ok(None);
    }

    let mut total = 0.0;
    let mut weight_sum = 0.0;
    for &(metric, weight) in &self.metrics {
      let value = match metric.score(query, embedding) {
        Ok(value) => value,
        Err(SimilarityError::ZeroNorm) => 0.0,
        Err(err) => return Err(err.into()),
      };
      total += weight * value;
      weight_sum += weight;
    }
    Ok(Some(total / weight_sum))
  }
}

/// Configures and finalizes a [`Router`].
#[derive(Default)]
pub struct RouterBuilder {
  routes: Vec<Route>,
  encoder: Option<Arc<dyn Encoder>>,
  store: Option<Arc<dyn Store>>,
  metrics: Vec<(Metric, f64)>,
}

impl RouterBuilder {
  pub fn route(mut self, route: Route) -> Self {
    self.routes.push(route);
    self
  }

  pub fn routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
    self.routes.extend(routes);
    self
  }

  pub fn encoder(mut self, encoder: impl Encoder + 'static) -> Self {
    self.encoder = Some(Arc::new(encoder));
    self
  }

  pub fn store(mut self, store: impl Store + 'static) -> Self {
    self.store = Some(Arc::new(store));
    self
  }

  /// Add a scoring metric with the given weight. [`Metric::Cosine`] at weight
  /// 1.0 is the default when no metric is configured.
  pub fn metric(mut self, metric: Metric, weight: f64) -> Self {
    self.metrics.push((metric, weight));
    self
  }

  /// Encode and cache every utterance the store does not already hold, then
  /// hand back the ready router. Missing embeddings are encoded concurrently.
  pub async fn build(mut self) -> Result<Router, RouterError> {
    let encoder = self.encoder.take().ok_or(RouterError::MissingEncoder)?;
    let store = self.store.take().ok_or(RouterError::MissingStore)?;
    if self.metrics.is_empty() {
      self.metrics.push((Metric::Cosine, 1.0));
    }

    let mut missing: Vec<String> = Vec::new();
    for route in &self.routes {
      for utterance in &route.utterances {
        let cached = store
          .get(&utterance.text)
          .await
          .map_err(|source| RouterError::Store {
            utterance: utterance.text.clone(),
            source,
          })?;
        if cached.is_none() && !missing.iter().any(|text| text == &utterance.text) {
          missing.push(utterance.text.clone());
        }
      }
    }

    let embeddings = try_join_all(missing.iter().map(|text| {
      let encoder = Arc::clone(&encoder);
      async move {
        encoder
          .encode(text)
          .await
          .map_err(|source| RouterError::Encode {
            utterance: text.clone(),
            source,
          })
      }
    }))
    .await?;

    for (text, embedding) in missing.into_iter().zip(embeddings) {
      let utterance = Utterance::with_embedding(text, embedding);
      store
        .set(&utterance)
        .await
        .map_err(|source| RouterError::Store {
          utterance: utterance.text.clone(),
          source,
        })?;
    }

    tracing::debug!(routes = self.routes.len(), "router ready");

    Ok(Router {
      routes: self.routes,
      encoder,
      store,
      metrics: self.metrics,
    })
  }
}
