use crate::infra::InMemoryEmployeeRepository;
use clap::Args;
use employee_management::employees::{
    EmployeeService, EmployeeServiceConfig, EmployeeServiceError, InternalEmployee,
    InternalEmployeeView,
};
use employee_management::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// First name of the employee to onboard
    #[arg(long, default_value = "Moudy")]
    pub(crate) first_name: String,
    /// Last name of the employee to onboard
    #[arg(long, default_value = "Rasmy")]
    pub(crate) last_name: String,
    /// Raise to grant after the rejected one
    #[arg(long, default_value_t = 250)]
    pub(crate) raise: i64,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        first_name,
        last_name,
        raise,
    } = args;

    let repository = Arc::new(InMemoryEmployeeRepository::seeded());
    let service = EmployeeService::new(repository, EmployeeServiceConfig::default());

    println!("Employee management demo");
    println!("\nCurrent staff");
    for employee in service.fetch_internal_employees().await? {
        render_staff_line(&employee);
    }
    for contractor in service.fetch_external_employees().await? {
        println!(
            "- {} (external, {})",
            contractor.display_name(),
            contractor.company
        );
    }

    println!("\nOnboarding {first_name} {last_name}");
    let mut employee = match service
        .create_internal_employee(&first_name, &last_name)
        .await
    {
        Ok(employee) => employee,
        Err(EmployeeServiceError::Validation(err)) => {
            println!("  Onboarding rejected: {err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!("  Mandatory courses:");
    for course in &employee.attended_courses {
        println!("    - {} ({})", course.title, course.id);
    }
    service.add_internal_employee(&employee).await?;

    let bounds = service
        .policy()
        .config()
        .bounds_for(employee.job_level);
    println!(
        "\nRaise policy for {} employees: {}..={}",
        employee.job_level.label(),
        bounds.minimum,
        bounds.maximum
    );

    for amount in [33, raise] {
        match service.give_raise(&mut employee, amount).await {
            Ok(()) => println!("- Raise of {amount} granted, salary now {}", employee.salary),
            Err(EmployeeServiceError::InvalidRaise(err)) => println!("- {err}"),
            Err(err) => return Err(err.into()),
        }
    }

    match serde_json::to_string_pretty(&InternalEmployeeView::from(&employee)) {
        Ok(json) => println!("\nPublic representation:\n{json}"),
        Err(err) => println!("\nPublic representation unavailable: {err}"),
    }

    Ok(())
}

fn render_staff_line(employee: &InternalEmployee) {
    println!(
        "- {} ({}, {} years) salary {} | suggested bonus {} | {} course(s)",
        employee.display_name(),
        employee.job_level.label(),
        employee.years_in_service,
        employee.salary,
        employee.suggested_bonus(),
        employee.attended_courses.len()
    );
}
