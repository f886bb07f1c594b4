use sea_orm::DatabaseConnection;

use crate::{
    model::customer::{CreateCustomerDto, CustomerDto, UpdateCustomerDto},
    server::{data::customer::CustomerRepository, error::AppError},
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new customer
    ///
    /// # Returns
    /// - `Ok(CustomerDto)`: The created customer
    /// - `Err(AppError::BadRequest)`: Email already in use for this business
    /// - `Err(AppError)`: Database error
    pub async fn create(
        &self,
        business_id: i32,
        dto: CreateCustomerDto,
    ) -> Result<CustomerDto, AppError> {
        let email = dto.email.trim().to_lowercase();

        let repository = CustomerRepository::new(self.db);
        if repository.find_by_email(business_id, &email).await?.is_some() {
            return Err(AppError::BadRequest(
                "A customer with this email already exists".to_string(),
            ));
        }

        let customer = repository
            .create(business_id, dto.full_name, email, dto.phone)
            .await?;

        Ok(customer.into())
    }

    /// Gets a customer by ID
    ///
    /// # Returns
    /// - `Ok(Some(CustomerDto))`: Customer found
    /// - `Ok(None)`: Customer not found for this business
    /// - `Err(AppError)`: Database error
    pub async fn get(&self, business_id: i32, id: i32) -> Result<Option<CustomerDto>, AppError> {
        Ok(CustomerRepository::new(self.db)
            .find_by_id(business_id, id)
            .await?
            .map(Into::into))
    }

    /// Lists the business's customers, ordered by name
    ///
    /// # Returns
    /// - `Ok(Vec<CustomerDto>)`: Customers for the business
    /// - `Err(AppError)`: Database error
    pub async fn list(&self, business_id: i32) -> Result<Vec<CustomerDto>, AppError> {
        Ok(CustomerRepository::new(self.db)
            .list(business_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Updates a customer's contact details
    ///
    /// # Returns
    /// - `Ok(CustomerDto)`: The updated customer
    /// - `Err(AppError::NotFound)`: Customer not found for this business
    /// - `Err(AppError)`: Database error
    pub async fn update(
        &self,
        business_id: i32,
        id: i32,
        dto: UpdateCustomerDto,
    ) -> Result<CustomerDto, AppError> {
        CustomerRepository::new(self.db)
            .update(
                business_id,
                id,
                dto.full_name,
                dto.email.map(|email| email.trim().to_lowercase()),
                dto.phone,
            )
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }
}
