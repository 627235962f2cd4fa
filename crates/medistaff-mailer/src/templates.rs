//! Notification email content.
//!
//! Each template returns `(subject, text body, html body)`. Content is in
//! Spanish to match the console the HR team uses.

use medistaff_entity::employee::EmployeeSummary;
use medistaff_entity::equipment::EquipmentSummary;
use medistaff_entity::offboarding::OffboardingRecord;

/// Notice sent when an employee exit has been processed.
pub fn offboarding_notice(
    employee: &EmployeeSummary,
    record: &OffboardingRecord,
) -> (String, String, String) {
    let subject = format!(
        "BAJA DE EMPLEADO - {} - Legajo {}",
        employee.full_name(),
        employee.payroll_number
    );

    let position = employee.position_name.as_deref().unwrap_or("No especificado");
    let sector = employee.sector_name.as_deref().unwrap_or("Sin sector específico");

    let text = format!(
        "NOTIFICACIÓN DE BAJA DE EMPLEADO - MediStaff\n\
         \n\
         EMPLEADO:\n\
         - Nombre: {name}\n\
         - DNI: {dni}\n\
         - Legajo: {payroll}\n\
         - Puesto: {position}\n\
         - Sector: {sector}\n\
         \n\
         DETALLES DE LA BAJA:\n\
         - Fecha: {exit_date}\n\
         - Tipo: {exit_type}\n\
         - Motivo: {reason}\n\
         {notes}\
         \n\
         ACCIONES REQUERIDAS PARA SISTEMAS:\n\
         - Desactivar cuentas de usuario\n\
         - Revocar accesos a aplicaciones\n\
         - Bloquear acceso a red y VPN\n\
         - Recuperar equipos asignados\n\
         - Actualizar directorio corporativo\n",
        name = employee.full_name(),
        dni = employee.dni,
        payroll = employee.payroll_number,
        position = position,
        sector = sector,
        exit_date = record.exit_date,
        exit_type = record.exit_type.label(),
        reason = record.reason,
        notes = record
            .notes
            .as_deref()
            .map(|n| format!("- Observaciones: {n}\n"))
            .unwrap_or_default(),
    );

    let html = format!(
        "<html><body>\
         <h2>MediStaff - Notificación de Baja de Empleado</h2>\
         <p><strong>ATENCIÓN:</strong> se ha procesado una baja de empleado en el sistema.</p>\
         <h3>Información del Empleado</h3>\
         <ul>\
         <li><strong>Nombre:</strong> {name}</li>\
         <li><strong>DNI:</strong> {dni}</li>\
         <li><strong>Legajo:</strong> {payroll}</li>\
         <li><strong>Puesto:</strong> {position}</li>\
         <li><strong>Sector:</strong> {sector}</li>\
         </ul>\
         <h3>Detalles de la Baja</h3>\
         <ul>\
         <li><strong>Fecha de baja:</strong> {exit_date}</li>\
         <li><strong>Tipo de baja:</strong> {exit_type}</li>\
         <li><strong>Motivo:</strong> {reason}</li>\
         {notes}\
         </ul>\
         <p>Gestionar la desactivación de cuentas, accesos y la recuperación \
         de equipos asignados.</p>\
         <p><em>Mensaje automático del sistema MediStaff - no responder.</em></p>\
         </body></html>",
        name = employee.full_name(),
        dni = employee.dni,
        payroll = employee.payroll_number,
        position = position,
        sector = sector,
        exit_date = record.exit_date,
        exit_type = record.exit_type.label(),
        reason = record.reason,
        notes = record
            .notes
            .as_deref()
            .map(|n| format!("<li><strong>Observaciones:</strong> {n}</li>"))
            .unwrap_or_default(),
    );

    (subject, text, html)
}

/// Reminder listing equipment an offboarded employee has not returned.
pub fn equipment_reminder(
    employee: &EmployeeSummary,
    assets: &[EquipmentSummary],
) -> (String, String, String) {
    let subject = format!("EQUIPOS PENDIENTES - {}", employee.full_name());

    let text_list: String = assets
        .iter()
        .map(|a| {
            format!(
                "- {} ({}){}\n",
                a.name,
                a.asset_code,
                a.brand.as_deref().map(|b| format!(" - {b}")).unwrap_or_default()
            )
        })
        .collect();

    let text = format!(
        "RECORDATORIO - Equipos pendientes de devolución\n\
         \n\
         El empleado {name} (Legajo: {payroll}) tiene equipos pendientes de \
         devolución:\n\
         \n\
         {list}\
         \n\
         Gestionar la devolución antes de completar el proceso de baja.\n",
        name = employee.full_name(),
        payroll = employee.payroll_number,
        list = text_list,
    );

    let html_list: String = assets
        .iter()
        .map(|a| {
            format!(
                "<li>{} ({}){}</li>",
                a.name,
                a.asset_code,
                a.brand.as_deref().map(|b| format!(" - {b}")).unwrap_or_default()
            )
        })
        .collect();

    let html = format!(
        "<html><body>\
         <h2>Recordatorio - Equipos pendientes de devolución</h2>\
         <p><strong>ATENCIÓN:</strong> el empleado {name} (Legajo: {payroll}) \
         tiene equipos pendientes de devolución.</p>\
         <ul>{list}</ul>\
         <p>Gestionar la devolución de estos equipos antes de completar el \
         proceso de baja.</p>\
         <p><em>Mensaje automático del sistema MediStaff - no responder.</em></p>\
         </body></html>",
        name = employee.full_name(),
        payroll = employee.payroll_number,
        list = html_list,
    );

    (subject, text, html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use medistaff_entity::offboarding::{ExitType, OffboardingStatus};
    use uuid::Uuid;

    fn employee() -> EmployeeSummary {
        EmployeeSummary {
            id: Uuid::new_v4(),
            dni: "28999111".to_string(),
            payroll_number: "L-0117".to_string(),
            first_name: "Jorge".to_string(),
            last_name: "Paz".to_string(),
            position_name: None,
            sector_name: Some("Guardia".to_string()),
        }
    }

    #[test]
    fn test_offboarding_notice_content() {
        let emp = employee();
        let record = OffboardingRecord {
            id: Uuid::new_v4(),
            employee_id: emp.id,
            exit_date: "2024-07-01".parse().unwrap(),
            exit_type: ExitType::Dismissal,
            reason: "Reestructuración".to_string(),
            notes: Some("Entregar credencial".to_string()),
            status: OffboardingStatus::Processed,
            processed_by: None,
            created_at: Utc::now(),
        };

        let (subject, text, html) = offboarding_notice(&emp, &record);
        assert!(subject.contains("Paz, Jorge"));
        assert!(subject.contains("L-0117"));
        assert!(text.contains("28999111"));
        assert!(text.contains("Despido"));
        assert!(text.contains("Entregar credencial"));
        assert!(html.contains("Reestructuración"));
    }

    #[test]
    fn test_equipment_reminder_lists_every_asset() {
        let emp = employee();
        let assets = vec![
            EquipmentSummary {
                id: Uuid::new_v4(),
                asset_code: "NB-001".to_string(),
                name: "Notebook Dell".to_string(),
                brand: Some("Dell".to_string()),
            },
            EquipmentSummary {
                id: Uuid::new_v4(),
                asset_code: "PR-003".to_string(),
                name: "Proyector Epson".to_string(),
                brand: None,
            },
        ];

        let (subject, text, html) = equipment_reminder(&emp, &assets);
        assert!(subject.contains("EQUIPOS PENDIENTES"));
        assert!(text.contains("NB-001"));
        assert!(text.contains("PR-003"));
        assert!(html.contains("Notebook Dell"));
        assert!(html.contains("Proyector Epson"));
    }
}
