use actix_web::{delete, get, post, web, HttpResponse, Responder};
use registry::model::person::Person;
use registry::repository::sqlite::SqlitePersonRepository;
use registry::service::service::{NationalRegistryService, RegistryError};

type Registry = web::Data<NationalRegistryService<SqlitePersonRepository>>;

#[get("/api/nationalregistry")]
pub async fn find_all(registry: Registry) -> impl Responder {
    match registry.find_all() {
        Ok(people) => HttpResponse::Ok().json(people),
        Err(error) => store_fault(error),
    }
}

#[post("/api/nationalregistry")]
pub async fn save(registry: Registry, person: Option<web::Json<Person>>) -> impl Responder {
    // A missing or undeserializable body extracts to None, the service owns
    // the PersonNotProvided decision.
    match registry.save(person.map(web::Json::into_inner)) {
        Ok(saved) => HttpResponse::Created().json(saved),
        Err(error @ (RegistryError::PersonMismatch | RegistryError::PersonNotProvided)) => {
            log::info!("{error}");
            HttpResponse::BadRequest().finish()
        }
        Err(error) => store_fault(error),
    }
}

#[get("/api/nationalregistry/{nationalIdentificationNumber}")]
pub async fn find_by_identification_number(
    registry: Registry,
    path: web::Path<String>,
) -> impl Responder {
    // A miss is a 200 with a null body, matching the registry's published contract
    match registry.find_by_identification_number(&path.into_inner()) {
        Ok(person) => HttpResponse::Ok().json(person),
        Err(error) => store_fault(error),
    }
}

#[delete("/api/nationalregistry/{nationalIdentificationNumber}")]
pub async fn delete_by_identification_number(
    registry: Registry,
    path: web::Path<String>,
) -> impl Responder {
    match registry.delete_by_identification_number(&path.into_inner()) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error @ RegistryError::PersonNotFound) => {
            log::info!("{error}");
            HttpResponse::NotFound().finish()
        }
        Err(error) => store_fault(error),
    }
}

fn store_fault(error: RegistryError) -> HttpResponse {
    log::warn!("record store fault: {error}");
    HttpResponse::ServiceUnavailable().finish()
}
