use contracts::system::auth::Permission;

use crate::system::auth::CurrentActor;

/// Work areas reachable from the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Students,
    Classes,
    Subjects,
    Attendance,
    Teachers,
    Staff,
    Fees,
    Salaries,
    Users,
    Schools,
}

impl Section {
    pub fn all() -> [Section; 10] {
        use Section::*;
        [Students, Classes, Subjects, Attendance, Teachers, Staff, Fees, Salaries, Users, Schools]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Students => "Students",
            Section::Classes => "Classes",
            Section::Subjects => "Subjects",
            Section::Attendance => "Attendance",
            Section::Teachers => "Teachers",
            Section::Staff => "Staff",
            Section::Fees => "Fees",
            Section::Salaries => "Salaries",
            Section::Users => "Users",
            Section::Schools => "Schools",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Students => "students",
            Section::Classes => "classes",
            Section::Subjects => "subjects",
            Section::Attendance => "attendance",
            Section::Teachers => "teachers",
            Section::Staff => "staff",
            Section::Fees => "fees",
            Section::Salaries => "salaries",
            Section::Users => "users",
            Section::Schools => "tenants",
        }
    }

    /// Sidebar heading the entry is listed under
    pub fn group(&self) -> &'static str {
        match self {
            Section::Students | Section::Classes | Section::Subjects | Section::Attendance => "School",
            Section::Teachers | Section::Staff => "People",
            Section::Fees | Section::Salaries => "Finance",
            Section::Users | Section::Schools => "Administration",
        }
    }

    pub fn permission(&self) -> Permission {
        match self {
            Section::Students | Section::Classes | Section::Subjects | Section::Attendance => {
                Permission::ViewStudents
            }
            Section::Teachers | Section::Staff => Permission::ViewEmployees,
            Section::Fees | Section::Salaries => Permission::ViewFinance,
            Section::Users => Permission::ManageUsers,
            Section::Schools => Permission::ManageTenants,
        }
    }
}

/// Sections the actor may open, in sidebar order
pub fn visible_for(actor: &CurrentActor) -> Vec<Section> {
    Section::all()
        .into_iter()
        .filter(|s| actor.can(s.permission()))
        .collect()
}

/// The section to show: the wanted one when allowed, else the first allowed
pub fn resolve(actor: &CurrentActor, wanted: Section) -> Option<Section> {
    if actor.can(wanted.permission()) {
        Some(wanted)
    } else {
        visible_for(actor).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::actor::actor_with_role;
    use contracts::enums::Role;

    #[test]
    fn test_teacher_sees_school_sections_only() {
        let teacher = actor_with_role(Role::Teacher);
        assert_eq!(
            visible_for(&teacher),
            vec![Section::Students, Section::Classes, Section::Subjects, Section::Attendance]
        );
    }

    #[test]
    fn test_schools_listed_for_super_admin_only() {
        assert!(visible_for(&actor_with_role(Role::SuperAdmin)).contains(&Section::Schools));
        let admin = visible_for(&actor_with_role(Role::Admin));
        assert!(admin.contains(&Section::Users));
        assert!(!admin.contains(&Section::Schools));
    }

    #[test]
    fn test_resolved_section_passes_its_guard() {
        for role in Role::all() {
            let actor = actor_with_role(role);
            for wanted in Section::all() {
                if let Some(shown) = resolve(&actor, wanted) {
                    assert!(actor.can(shown.permission()), "{:?} for {:?}", shown, role);
                }
            }
        }
    }

    #[test]
    fn test_resolve_falls_back_to_first_allowed() {
        let staff = actor_with_role(Role::Staff);
        assert_eq!(resolve(&staff, Section::Fees), Some(Section::Students));
        assert_eq!(resolve(&staff, Section::Subjects), Some(Section::Subjects));
        let accountant = actor_with_role(Role::Accountant);
        assert_eq!(resolve(&accountant, Section::Salaries), Some(Section::Salaries));
    }
}
