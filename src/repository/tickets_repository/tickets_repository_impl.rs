use super::{
    entity::{movie_date_to_bson, TicketDetailsFindEntity, TicketFindEntity, TicketInsertEntity},
    Ticket, TicketDetails, TicketsRepository,
};
use crate::repository::{self, movies_repository::MOVIES, Error, UpdateConflict};
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Database, IndexModel};
use time::{Date, PrimitiveDateTime};
use uuid::Uuid;

const TICKETS: &str = "tickets";
const INDEX_NAME_MOVIE_DATE: &str = "index_movie_date";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection = database.collection::<Document>(TICKETS);

        collection
            .create_index(
                IndexModel::builder()
                    .keys(doc! {
                        "movie_date": 1,
                    })
                    .options(
                        IndexOptions::builder()
                            .name(INDEX_NAME_MOVIE_DATE.to_string())
                            .build(),
                    )
                    .build(),
            )
            .await?;
        tracing::debug!(
            collection = TICKETS,
            index = INDEX_NAME_MOVIE_DATE,
            "ensured index"
        );

        Ok(Self { database })
    }

    ///
    /// Stages joining ticket with its movie.
    /// Tickets without matching movie are kept.
    ///
    fn lookup_movie_stages() -> [Document; 2] {
        [
            doc! {
                "$lookup": {
                    "from": MOVIES,
                    "localField": "movie_id",
                    "foreignField": "_id",
                    "as": "movie",
                }
            },
            doc! {
                "$unwind": {
                    "path": "$movie",
                    "preserveNullAndEmptyArrays": true,
                }
            },
        ]
    }

    ///
    /// Filter matching whole day: [date 00:00, next day 00:00)
    ///
    fn movie_date_filter(movie_date: Date) -> Document {
        let start = movie_date_to_bson(movie_date.midnight());

        match movie_date.next_day() {
            Some(next_day) => doc! {
                "$gte": start,
                "$lt": movie_date_to_bson(next_day.midnight()),
            },
            None => doc! {
                "$gte": start,
            },
        }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        id: Uuid,
        movie_date: PrimitiveDateTime,
        ticket_price: f32,
        movie_id: Option<Uuid>,
    ) -> Result<(), repository::Error> {
        let insert_entity = TicketInsertEntity {
            _id: id.into(),
            movie_date: movie_date_to_bson(movie_date),
            ticket_price: f64::from(ticket_price),
            movie_id: movie_id.map(bson::Uuid::from),
            version: 0,
        };

        self.database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(insert_entity)
            .await?;

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Ticket>, repository::Error> {
        let ticket = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "_id": bson::Uuid::from(id),
            })
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }

    async fn find_with_movie(&self, id: Uuid) -> Result<Option<TicketDetails>, repository::Error> {
        let mut pipeline = vec![doc! {
            "$match": {
                "_id": bson::Uuid::from(id),
            }
        }];
        pipeline.extend(Self::lookup_movie_stages());

        let ticket = self
            .database
            .collection::<Document>(TICKETS)
            .aggregate(pipeline)
            .with_type::<TicketDetailsFindEntity>()
            .await?
            .try_next()
            .await?
            .map(TicketDetails::from);

        Ok(ticket)
    }

    async fn find_many_with_movie(
        &self,
        movie_date: Option<Date>,
    ) -> Result<Vec<TicketDetails>, repository::Error> {
        let mut pipeline = Vec::with_capacity(4);
        if let Some(movie_date) = movie_date {
            pipeline.push(doc! {
                "$match": {
                    "movie_date": Self::movie_date_filter(movie_date),
                }
            });
        }
        pipeline.push(doc! {
            "$sort": {
                "movie_date": 1,
                "_id": 1,
            }
        });
        pipeline.extend(Self::lookup_movie_stages());

        let tickets = self
            .database
            .collection::<Document>(TICKETS)
            .aggregate(pipeline)
            .with_type::<TicketDetailsFindEntity>()
            .await?
            .map_ok(TicketDetails::from)
            .try_collect()
            .await?;

        Ok(tickets)
    }

    async fn update(
        &self,
        id: Uuid,
        version: i64,
        movie_date: PrimitiveDateTime,
        ticket_price: f32,
    ) -> Result<(), repository::Error> {
        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_one(
                doc! {
                    "_id": bson::Uuid::from(id),
                    "version": version,
                },
                doc! {
                    "$set": {
                        "movie_date": movie_date_to_bson(movie_date),
                        "ticket_price": f64::from(ticket_price),
                    },
                    "$inc": {
                        "version": 1_i64,
                    }
                },
            )
            .await?;

        if update_result.matched_count == 1 {
            return Ok(());
        }

        let conflict = match self.exists(id).await? {
            true => UpdateConflict::Modified,
            false => UpdateConflict::Deleted,
        };

        Err(Error::UpdateConflict(conflict))
    }

    async fn delete(&self, id: Uuid) -> Result<(), repository::Error> {
        let delete_result = self
            .database
            .collection::<Document>(TICKETS)
            .delete_one(doc! {
                "_id": bson::Uuid::from(id),
            })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentDeleted),
        }
    }

    async fn exists(&self, id: Uuid) -> Result<bool, repository::Error> {
        let count = self
            .database
            .collection::<Document>(TICKETS)
            .count_documents(doc! {
                "_id": bson::Uuid::from(id),
            })
            .limit(1)
            .await?;

        Ok(count > 0)
    }
}

///
/// Tests require env variables to be set and database to be running
///
#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::test::{create_test_database, destroy_test_database};
    use time::macros::{date, datetime};

    async fn insert_movie(database: &Database, id: Uuid, movie_name: &str) {
        database
            .collection::<Document>(MOVIES)
            .insert_one(doc! {
                "_id": bson::Uuid::from(id),
                "movie_name": movie_name,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn insert_values_unchanged() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();
        let id = Uuid::new_v4();
        let movie_id = Uuid::new_v4();

        repository
            .insert(id, datetime!(2024-03-15 19:00), 12.5, Some(movie_id))
            .await
            .unwrap();

        let entity = database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! { "_id": bson::Uuid::from(id) })
            .await
            .unwrap()
            .unwrap();
        let ticket = Ticket::from(entity);

        assert_eq!(
            ticket,
            Ticket {
                id,
                movie_date: datetime!(2024-03-15 19:00),
                ticket_price: 12.5,
                movie_id: Some(movie_id),
                version: 0,
            }
        );

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn find_not_existing() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();

        let ticket = repository.find(Uuid::new_v4()).await.unwrap();

        assert_eq!(ticket, None);

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn find_with_movie_movie_loaded() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();
        let id = Uuid::new_v4();
        let movie_id = Uuid::new_v4();
        insert_movie(&database, movie_id, "Metropolis").await;
        repository
            .insert(id, datetime!(2024-03-15 19:00), 10.0, Some(movie_id))
            .await
            .unwrap();

        let ticket = repository.find_with_movie(id).await.unwrap().unwrap();

        assert_eq!(ticket.ticket.id, id);
        assert_eq!(
            ticket.movie,
            Some(repository::Movie {
                id: movie_id,
                movie_name: "Metropolis".to_string(),
            })
        );

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn find_with_movie_without_movie() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();
        let id = Uuid::new_v4();
        repository
            .insert(id, datetime!(2024-03-15 19:00), 10.0, None)
            .await
            .unwrap();

        let ticket = repository.find_with_movie(id).await.unwrap().unwrap();

        assert_eq!(ticket.ticket.movie_id, None);
        assert_eq!(ticket.movie, None);

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn find_with_movie_not_existing() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();

        let ticket = repository.find_with_movie(Uuid::new_v4()).await.unwrap();

        assert_eq!(ticket, None);

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn find_many_with_movie_no_filter() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();
        let movie_id = Uuid::new_v4();
        insert_movie(&database, movie_id, "Metropolis").await;
        repository
            .insert(Uuid::new_v4(), datetime!(2024-03-15 19:00), 10.0, Some(movie_id))
            .await
            .unwrap();
        repository
            .insert(Uuid::new_v4(), datetime!(2024-03-16 10:00), 11.0, None)
            .await
            .unwrap();

        let tickets = repository.find_many_with_movie(None).await.unwrap();

        assert_eq!(tickets.len(), 2);
        assert_eq!(
            tickets.iter().filter(|ticket| ticket.movie.is_some()).count(),
            1
        );

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn find_many_with_movie_filter_date_portion_only() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();
        let matching = [
            (Uuid::new_v4(), datetime!(2024-03-15 00:00)),
            (Uuid::new_v4(), datetime!(2024-03-15 19:00)),
            (Uuid::new_v4(), datetime!(2024-03-15 23:59:59)),
        ];
        let not_matching = [
            (Uuid::new_v4(), datetime!(2024-03-14 23:59:59)),
            (Uuid::new_v4(), datetime!(2024-03-16 00:00)),
            (Uuid::new_v4(), datetime!(2024-03-16 10:00)),
        ];
        for (id, movie_date) in matching.iter().chain(not_matching.iter()) {
            repository
                .insert(*id, *movie_date, 10.0, None)
                .await
                .unwrap();
        }

        let tickets = repository
            .find_many_with_movie(Some(date!(2024 - 03 - 15)))
            .await
            .unwrap();

        assert_eq!(tickets.len(), matching.len());
        for (id, _) in matching {
            assert!(tickets.iter().any(|ticket| ticket.ticket.id == id));
        }

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn find_many_with_movie_sorted_by_movie_date() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();
        let movie_dates = [
            datetime!(2024-03-15 21:00),
            datetime!(2024-03-15 09:30),
            datetime!(2024-03-14 18:00),
            datetime!(2024-03-15 12:00),
        ];
        for movie_date in movie_dates {
            repository
                .insert(Uuid::new_v4(), movie_date, 10.0, None)
                .await
                .unwrap();
        }

        let all_tickets = repository.find_many_with_movie(None).await.unwrap();
        let day_tickets = repository
            .find_many_with_movie(Some(date!(2024 - 03 - 15)))
            .await
            .unwrap();

        let all_dates = all_tickets
            .iter()
            .map(|ticket| ticket.ticket.movie_date)
            .collect::<Vec<_>>();
        assert_eq!(
            all_dates,
            vec![
                datetime!(2024-03-14 18:00),
                datetime!(2024-03-15 09:30),
                datetime!(2024-03-15 12:00),
                datetime!(2024-03-15 21:00),
            ]
        );
        let day_dates = day_tickets
            .iter()
            .map(|ticket| ticket.ticket.movie_date)
            .collect::<Vec<_>>();
        assert_eq!(
            day_dates,
            vec![
                datetime!(2024-03-15 09:30),
                datetime!(2024-03-15 12:00),
                datetime!(2024-03-15 21:00),
            ]
        );

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn update_values_updated_and_version_incremented() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();
        let id = Uuid::new_v4();
        let movie_id = Uuid::new_v4();
        repository
            .insert(id, datetime!(2024-03-15 19:00), 10.0, Some(movie_id))
            .await
            .unwrap();

        repository
            .update(id, 0, datetime!(2024-03-20 21:30), 15.5)
            .await
            .unwrap();

        let ticket = repository.find(id).await.unwrap().unwrap();
        assert_eq!(
            ticket,
            Ticket {
                id,
                movie_date: datetime!(2024-03-20 21:30),
                ticket_price: 15.5,
                movie_id: Some(movie_id),
                version: 1,
            }
        );

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn update_stale_version() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();
        let id = Uuid::new_v4();
        repository
            .insert(id, datetime!(2024-03-15 19:00), 10.0, None)
            .await
            .unwrap();
        repository
            .update(id, 0, datetime!(2024-03-15 20:00), 10.0)
            .await
            .unwrap();

        let update_result = repository
            .update(id, 0, datetime!(2024-03-15 21:00), 12.0)
            .await;

        assert!(matches!(
            update_result,
            Err(Error::UpdateConflict(UpdateConflict::Modified))
        ));
        let ticket = repository.find(id).await.unwrap().unwrap();
        assert_eq!(ticket.movie_date, datetime!(2024-03-15 20:00));
        assert_eq!(ticket.version, 1);

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn update_not_existing() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();

        let update_result = repository
            .update(Uuid::new_v4(), 0, datetime!(2024-03-15 21:00), 12.0)
            .await;

        assert!(matches!(
            update_result,
            Err(Error::UpdateConflict(UpdateConflict::Deleted))
        ));

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn delete_existing() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();
        let id = Uuid::new_v4();
        repository
            .insert(id, datetime!(2024-03-15 19:00), 10.0, None)
            .await
            .unwrap();

        repository.delete(id).await.unwrap();

        assert!(!repository.exists(id).await.unwrap());

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn delete_not_existing() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();

        let delete_result = repository.delete(Uuid::new_v4()).await;

        assert!(matches!(delete_result, Err(Error::NoDocumentDeleted)));

        destroy_test_database(database).await;
    }

    #[tokio::test]
    async fn exists_existing() {
        let database = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(database.clone()).await.unwrap();
        let id = Uuid::new_v4();
        repository
            .insert(id, datetime!(2024-03-15 19:00), 10.0, None)
            .await
            .unwrap();

        assert!(repository.exists(id).await.unwrap());
        assert!(!repository.exists(Uuid::new_v4()).await.unwrap());

        destroy_test_database(database).await;
    }
}
