//! SQL statements
//!
//! Each handler runs exactly one of these. Date and time values arrive as
//! text and are cast by the database, which decides what is valid.

/// Connectivity check
pub const PING: &str = "SELECT 1";

/// All flights with their route airports and aircraft
pub const LIST_FLIGHTS: &str = r#"
    SELECT f.flight_id, f.flight_number, a1.airport_code AS origin,
           a2.airport_code AS destination, f.departure_time, f.arrival_time,
           ac.registration_number, ac_type.model AS aircraft_model, f.status
    FROM flights f
    JOIN routes r ON f.route_id = r.route_id
    JOIN airports a1 ON r.origin_airport_id = a1.airport_id
    JOIN airports a2 ON r.destination_airport_id = a2.airport_id
    JOIN aircraft ac ON f.aircraft_id = ac.aircraft_id
    JOIN aircraft_types ac_type ON ac.aircraft_type_id = ac_type.aircraft_type_id
"#;

pub const INSERT_FLIGHT: &str = r#"
    INSERT INTO flights (flight_number, airline_id, route_id, aircraft_id,
        departure_time, arrival_time, status)
    VALUES ($1, $2, $3, $4, $5::text::timestamp, $6::text::timestamp, $7)
"#;

/// All aircraft with their type
pub const LIST_AIRCRAFT: &str = r#"
    SELECT a.aircraft_id, a.registration_number, at.model, at.capacity,
           a.manufacturing_date, a.last_maintenance_date, a.next_maintenance_date,
           a.status
    FROM aircraft a
    JOIN aircraft_types at ON a.aircraft_type_id = at.aircraft_type_id
"#;

pub const INSERT_AIRCRAFT: &str = r#"
    INSERT INTO aircraft (registration_number, aircraft_type_id, airline_id,
        manufacturing_date, last_maintenance_date, next_maintenance_date, status)
    VALUES ($1, $2, $3, $4::text::date, $5::text::date, $6::text::date, $7)
"#;

/// All crew members with their position
pub const LIST_CREW: &str = r#"
    SELECT c.crew_id, c.employee_id, c.first_name, c.last_name,
           cp.position_name, c.experience_years, c.hire_date, c.certifications, c.status
    FROM crew c
    JOIN crew_positions cp ON c.position_id = cp.position_id
"#;

pub const INSERT_CREW: &str = r#"
    INSERT INTO crew (employee_id, first_name, last_name, position_id, airline_id,
        experience_years, hire_date, certifications, status)
    VALUES ($1, $2, $3, $4, $5, $6, $7::text::date, $8, $9)
"#;
