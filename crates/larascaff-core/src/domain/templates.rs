//! Service and repository code templates.
//!
//! Pure string-formatting functions: given an [`EntityName`] they produce the
//! PHP source text for a contract interface and its implementing class, in
//! two flavors. The repository flavor wraps the generic all/find/create/
//! update/delete data-access pattern around an Eloquent model; the service
//! flavor delegates the same five operations to a repository contract.
//!
//! No I/O and no failure modes: any valid `EntityName` renders to
//! syntactically well-formed PHP embedding the name verbatim.

use super::EntityName;

/// Render the service contract interface (`App\Services\Contracts`).
pub fn service_contract(name: &EntityName) -> String {
    format!(
        r#"<?php

namespace App\Services\Contracts;

interface {contract}
{{
    /**
     * Get all records
     */
    public function all();

    /**
     * Find record by ID
     */
    public function find($id);

    /**
     * Create new record
     */
    public function create(array $data);

    /**
     * Update record
     */
    public function update($id, array $data);

    /**
     * Delete record
     */
    public function delete($id);
}}
"#,
        contract = name.service_contract(),
    )
}

/// Render the service class delegating to the repository contract.
pub fn service(name: &EntityName) -> String {
    format!(
        r#"<?php

namespace App\Services;

use App\Services\Contracts\{contract};
use App\Repositories\Contracts\{repo_contract};

class {class} implements {contract}
{{
    protected $repository;

    public function __construct({repo_contract} $repository)
    {{
        $this->repository = $repository;
    }}

    /**
     * Get all records
     */
    public function all()
    {{
        return $this->repository->all();
    }}

    /**
     * Find record by ID
     */
    public function find($id)
    {{
        return $this->repository->find($id);
    }}

    /**
     * Create new record
     */
    public function create(array $data)
    {{
        return $this->repository->create($data);
    }}

    /**
     * Update record
     */
    public function update($id, array $data)
    {{
        return $this->repository->update($id, $data);
    }}

    /**
     * Delete record
     */
    public function delete($id)
    {{
        return $this->repository->delete($id);
    }}
}}
"#,
        class = name.service_class(),
        contract = name.service_contract(),
        repo_contract = name.repository_contract(),
    )
}

/// Render the repository contract interface (`App\Repositories\Contracts`).
pub fn repository_contract(name: &EntityName) -> String {
    format!(
        r#"<?php

namespace App\Repositories\Contracts;

interface {contract}
{{
    /**
     * Get all records
     */
    public function all();

    /**
     * Find record by ID
     */
    public function find($id);

    /**
     * Create new record
     */
    public function create(array $data);

    /**
     * Update record
     */
    public function update($id, array $data);

    /**
     * Delete record
     */
    public function delete($id);
}}
"#,
        contract = name.repository_contract(),
    )
}

/// Render the repository class wrapping the Eloquent model.
///
/// `update` and `delete` fetch first and return `null` / `false` when the
/// record does not exist, so callers never trip a missing-model exception for
/// plain CRUD.
pub fn repository(name: &EntityName) -> String {
    format!(
        r#"<?php

namespace App\Repositories;

use App\Repositories\Contracts\{contract};
use App\Models\{model};

class {class} implements {contract}
{{
    protected $model;

    public function __construct({model} $model)
    {{
        $this->model = $model;
    }}

    /**
     * Get all records
     */
    public function all()
    {{
        return $this->model->all();
    }}

    /**
     * Find record by ID
     */
    public function find($id)
    {{
        return $this->model->find($id);
    }}

    /**
     * Create new record
     */
    public function create(array $data)
    {{
        return $this->model->create($data);
    }}

    /**
     * Update record
     */
    public function update($id, array $data)
    {{
        $record = $this->model->find($id);
        if ($record) {{
            $record->update($data);
            return $record;
        }}
        return null;
    }}

    /**
     * Delete record
     */
    public function delete($id)
    {{
        $record = $this->model->find($id);
        if ($record) {{
            return $record->delete();
        }}
        return false;
    }}
}}
"#,
        class = name.repository_class(),
        contract = name.repository_contract(),
        model = name.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> EntityName {
        EntityName::new("order").unwrap()
    }

    #[test]
    fn service_contract_declares_interface_and_operations() {
        let src = service_contract(&order());
        assert!(src.contains("namespace App\\Services\\Contracts;"));
        assert!(src.contains("interface OrderServiceContract"));
        for op in ["all()", "find($id)", "create(array $data)", "update($id, array $data)", "delete($id)"] {
            assert!(src.contains(op), "missing operation: {op}");
        }
    }

    #[test]
    fn service_delegates_to_repository_contract() {
        let src = service(&order());
        assert!(src.contains("class OrderService implements OrderServiceContract"));
        assert!(src.contains("use App\\Repositories\\Contracts\\OrderRepositoryContract;"));
        assert!(src.contains("$this->repository->update($id, $data)"));
    }

    #[test]
    fn repository_wraps_the_model() {
        let src = repository(&order());
        assert!(src.contains("use App\\Models\\Order;"));
        assert!(src.contains("class OrderRepository implements OrderRepositoryContract"));
        assert!(src.contains("$this->model->create($data)"));
    }

    #[test]
    fn repository_update_returns_null_for_missing_record() {
        let src = repository(&order());
        assert!(src.contains("return null;"));
        assert!(src.contains("return false;"));
    }

    #[test]
    fn templates_embed_name_verbatim() {
        let name = EntityName::new("userProfile").unwrap();
        assert!(service(&name).contains("UserProfileService"));
        assert!(repository(&name).contains("UserProfileRepository"));
    }

    #[test]
    fn rendered_braces_are_balanced() {
        for src in [
            service_contract(&order()),
            service(&order()),
            repository_contract(&order()),
            repository(&order()),
        ] {
            let open = src.matches('{').count();
            let close = src.matches('}').count();
            assert_eq!(open, close, "unbalanced braces in:\n{src}");
        }
    }
}
