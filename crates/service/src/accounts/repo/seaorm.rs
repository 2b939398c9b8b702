use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, Select, Set,
};
use tracing::{debug, instrument};

use models::account;

use crate::accounts::domain::{Account, DEFAULT_ROLE};
use crate::accounts::filter::{AccountFilter, SortColumn};
use crate::accounts::store::{AccountLookup, AccountQuery, AccountSnapshot, AccountWriter};
use crate::errors::StoreError;

/// PostgreSQL-backed account store.
#[derive(Clone)]
pub struct SeaOrmAccountStore {
    pub db: DatabaseConnection,
}

impl SeaOrmAccountStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(m: account::Model) -> Account {
    Account {
        id: m.id,
        email: m.email,
        name: m.name,
        active: m.active,
        roles: m.roles,
        last_login: m.last_login.map(Into::into),
        created_at: Some(m.created_at.into()),
        updated_at: Some(m.updated_at.into()),
    }
}

fn db_err(e: sea_orm::DbErr) -> StoreError {
    StoreError::from(models::errors::ModelError::from(e))
}

/// `needle` is matched literally; LIKE wildcards in it are escaped.
fn lower_contains(column: account::Column, needle: &str) -> sea_orm::sea_query::SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn apply_filter(mut query: Select<account::Entity>, filter: &AccountFilter) -> Select<account::Entity> {
    if let Some(name) = &filter.name {
        query = query.filter(lower_contains(account::Column::Name, name));
    }
    if let Some(email) = &filter.email {
        query = query.filter(lower_contains(account::Column::Email, email));
    }
    if let Some(active) = filter.active {
        query = query.filter(account::Column::Active.eq(active));
    }
    for key in &filter.order {
        let column = match key.column {
            SortColumn::Id => account::Column::Id,
            SortColumn::Name => account::Column::Name,
            SortColumn::Email => account::Column::Email,
            SortColumn::CreatedAt => account::Column::CreatedAt,
        };
        let order = if key.descending { Order::Desc } else { Order::Asc };
        query = query.order_by(column, order);
    }
    query
}

#[async_trait]
impl AccountLookup for SeaOrmAccountStore {
    #[instrument(skip(self))]
    async fn get(&self, id: i32) -> Result<Account, StoreError> {
        account::find(&self.db, id)
            .await?
            .map(to_domain)
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl AccountWriter for SeaOrmAccountStore {
    #[instrument(skip(self, account), fields(email = %account.email))]
    async fn create(&self, account: Account) -> Result<Account, StoreError> {
        account.validate()?;
        let roles = if account.roles.is_empty() { vec![DEFAULT_ROLE.to_string()] } else { account.roles };
        let created = account::create(&self.db, &account.email, &account.name, account.active, roles).await?;
        debug!(id = created.id, "account created");
        Ok(to_domain(created))
    }

    #[instrument(skip(self, account), fields(id = account.id))]
    async fn update(&self, account: &Account) -> Result<Account, StoreError> {
        account.validate()?;
        let am = account::ActiveModel {
            id: Unchanged(account.id),
            email: Set(account.email.clone()),
            name: Set(account.name.clone()),
            active: Set(account.active),
            roles: Set(account.roles.clone()),
            last_login: Set(account.last_login.map(Into::into)),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };
        let updated = am.update(&self.db).await.map_err(db_err)?;
        Ok(to_domain(updated))
    }

    #[instrument(skip(self, account), fields(id = account.id))]
    async fn delete(&self, account: &Account) -> Result<(), StoreError> {
        if account::hard_delete(&self.db, account.id).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}

#[async_trait]
impl AccountQuery for SeaOrmAccountStore {
    #[instrument(skip(self))]
    async fn list(&self, filter: &AccountFilter) -> Result<(Vec<Account>, u64), StoreError> {
        let (page_idx, per_page) = filter.pagination.normalize();
        let paginator = apply_filter(account::Entity::find(), filter).paginate(&self.db, per_page);
        let total = paginator.num_items().await.map_err(db_err)?;
        let rows = paginator.fetch_page(page_idx).await.map_err(db_err)?;
        Ok((rows.into_iter().map(to_domain).collect(), total))
    }
}

#[async_trait]
impl AccountSnapshot for SeaOrmAccountStore {
    #[instrument(skip(self))]
    async fn list_only(&self) -> Result<Vec<Account>, StoreError> {
        let rows = account::Entity::find()
            .order_by_asc(account::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(to_domain).collect())
    }
}
