//! Embedded PHP assets published into the host application.
//!
//! These files ship inside the binary rather than alongside it, so a publish
//! step can never fail on a missing source file. The exception handler is the
//! only asset with a substitution: it is authored under the package namespace
//! and re-homed into `App\Exceptions` at publish time.

use larascaff_core::application::Asset;

/// `routes/api.php` starter file.
pub const API_ROUTES: &str = r#"<?php

use Illuminate\Http\Request;
use Illuminate\Support\Facades\Route;

/*
|--------------------------------------------------------------------------
| API Routes
|--------------------------------------------------------------------------
|
| Here is where you can register API routes for your application. These
| routes are loaded by the RouteServiceProvider and all of them will
| be assigned to the "api" middleware group. Make something great!
|
*/

Route::middleware('auth:sanctum')->get('/user', function (Request $request) {
    return $request->user();
});

/*
|--------------------------------------------------------------------------
| Service Repository API Routes
|--------------------------------------------------------------------------
|
| Add your API routes for services and repositories here.
| Example:
|
| Route::prefix('api/v1')->group(function () {
|     Route::apiResource('users', UserController::class);
|     Route::apiResource('products', ProductController::class);
| });
|
*/
"#;

/// `app/Constants/ApiCodes.php`: the numeric code table the generated API
/// layer shares with the exception handler.
pub const API_CODES: &str = r#"<?php

namespace App\Constants;

/**
 * Basic API Response Codes Constants
 */
class ApiCodes
{
    // Success Codes (2xx)
    const SUCCESS = 200;

    // Client Error Codes (4xx)
    const BAD_REQUEST = 400;
    const UNAUTHORIZED = 401;
    const FORBIDDEN = 403;
    const NOT_FOUND = 404;
    const UNPROCESSABLE_ENTITY = 422;

    // Server Error Codes (5xx)
    const INTERNAL_SERVER_ERROR = 500;

    // Custom Logic Codes (1000+)
    const VALIDATION_ERROR = 1000;

    /**
     * Get human readable message for a code
     */
    public static function getMessage(int $code): string
    {
        $messages = [
            self::SUCCESS => 'Success',
            self::BAD_REQUEST => 'Bad request',
            self::UNAUTHORIZED => 'Unauthorized',
            self::FORBIDDEN => 'Forbidden',
            self::NOT_FOUND => 'Resource not found',
            self::UNPROCESSABLE_ENTITY => 'Validation failed',
            self::INTERNAL_SERVER_ERROR => 'Internal server error',
            self::VALIDATION_ERROR => 'Validation error',
        ];

        return $messages[$code] ?? 'Unknown error';
    }

    /**
     * Convert code to readable format
     */
    public static function convertToReadable(int $code): string
    {
        $messages = [
            self::SUCCESS => 'SUCCESS',
            self::BAD_REQUEST => 'BAD_REQUEST',
            self::UNAUTHORIZED => 'UNAUTHORIZED',
            self::FORBIDDEN => 'FORBIDDEN',
            self::NOT_FOUND => 'NOT_FOUND',
            self::UNPROCESSABLE_ENTITY => 'VALIDATION_ERROR',
            self::INTERNAL_SERVER_ERROR => 'INTERNAL_SERVER_ERROR',
            self::VALIDATION_ERROR => 'VALIDATION_ERROR',
        ];

        return $messages[$code] ?? 'UNKNOWN_ERROR';
    }
}
"#;

/// `app/Http/Controllers/Api/BaseApiController.php`: the envelope formatter
/// every generated API controller extends.
pub const BASE_API_CONTROLLER: &str = r#"<?php

namespace App\Http\Controllers\Api;

use Illuminate\Routing\Controller;
use Illuminate\Http\JsonResponse;
use Illuminate\Database\Eloquent\Model;
use Illuminate\Pagination\LengthAwarePaginator;
use Illuminate\Support\Collection;
use App\Constants\ApiCodes;

/**
 * Base API Controller - Base controller for all API endpoints
 * Extends Laravel Controller and provides standardized response methods
 */
abstract class BaseApiController extends Controller
{
    /**
     * Smart response method - automatically handles array pattern [data, message, code]
     *
     * @param array $responseArray Array with format [data, message, code] or [data, message, code, errors]
     * @return JsonResponse Formatted response
     */
    protected function apiResponse(array $responseArray): JsonResponse
    {
        $data = $responseArray['data'] ?? null;
        $message = $responseArray['message'] ?? '';
        $code = $responseArray['code'] ?? ApiCodes::SUCCESS;
        $errors = $responseArray['errors'] ?? null;

        $response = [
            'success' => $code < ApiCodes::BAD_REQUEST,
            'message' => $message ?: ApiCodes::getMessage($code),
            'code' => $code,
        ];

        if ($errors !== null) {
            $response['errors'] = $errors;
        }

        if ($data !== null) {
            $response['data'] = $this->formatData($data);
        }

        return response()->json($response, $code);
    }

    /**
     * Format data based on data type
     *
     * @param mixed $data Data to format
     * @return mixed Formatted data
     */
    protected function formatData($data)
    {
        if ($data instanceof Model) {
            return $data->toArray();
        }

        if ($data instanceof LengthAwarePaginator) {
            return [
                'data' => $data->items(),
                'pagination' => [
                    'current_page' => $data->currentPage(),
                    'per_page' => $data->perPage(),
                    'total' => $data->total(),
                    'last_page' => $data->lastPage(),
                ],
            ];
        }

        if ($data instanceof Collection) {
            return $data->toArray();
        }

        if (is_array($data)) {
            return $data;
        }

        return $data;
    }
}
"#;

/// `app/Exceptions/Handler.php`: classifies framework exceptions into the
/// standard envelope. Authored under the package namespace; see
/// [`HANDLER_NAMESPACE_SUBSTITUTION`].
pub const EXCEPTION_HANDLER: &str = r#"<?php

namespace Larascaff\Exceptions;

use Illuminate\Foundation\Exceptions\Handler as ExceptionHandler;
use Illuminate\Http\JsonResponse;
use Illuminate\Http\Request;
use Illuminate\Validation\ValidationException;
use Illuminate\Auth\AuthenticationException;
use Illuminate\Auth\Access\AuthorizationException;
use Illuminate\Database\Eloquent\ModelNotFoundException;
use Illuminate\Database\QueryException;
use Symfony\Component\HttpKernel\Exception\NotFoundHttpException;
use Symfony\Component\HttpKernel\Exception\MethodNotAllowedHttpException;
use Symfony\Component\HttpKernel\Exception\HttpException;
use Throwable;
use App\Constants\ApiCodes;

/**
 * Custom Exception Handler for API standardization
 * Catches all Laravel exceptions and formats them according to API response standard
 */
class Handler extends ExceptionHandler
{
    /**
     * The list of the inputs that are never flashed to the session on validation exceptions.
     *
     * @var array<int, string>
     */
    protected $dontFlash = [
        'current_password',
        'password',
        'password_confirmation',
    ];

    /**
     * Register the exception handling callbacks for the application.
     */
    public function register(): void
    {
        $this->reportable(function (Throwable $e) {
            //
        });
    }

    /**
     * Render an exception into an HTTP response.
     */
    public function render($request, Throwable $e)
    {
        if ($request->expectsJson() || $request->is('api/*')) {
            return $this->handleApiException($request, $e);
        }

        return parent::render($request, $e);
    }

    /**
     * Handle API exceptions and format them according to API response standard
     */
    protected function handleApiException(Request $request, Throwable $e): JsonResponse
    {
        if ($e instanceof ValidationException) {
            return response()->json([
                'success' => false,
                'message' => 'Validation failed',
                'code' => ApiCodes::UNPROCESSABLE_ENTITY,
                'errors' => $e->errors()
            ], ApiCodes::UNPROCESSABLE_ENTITY);
        }

        if ($e instanceof AuthenticationException) {
            return response()->json([
                'success' => false,
                'message' => 'Unauthenticated',
                'code' => ApiCodes::UNAUTHORIZED
            ], ApiCodes::UNAUTHORIZED);
        }

        if ($e instanceof AuthorizationException) {
            return response()->json([
                'success' => false,
                'message' => 'Access denied',
                'code' => ApiCodes::FORBIDDEN
            ], ApiCodes::FORBIDDEN);
        }

        if ($e instanceof ModelNotFoundException) {
            return response()->json([
                'success' => false,
                'message' => 'Resource not found',
                'code' => ApiCodes::NOT_FOUND
            ], ApiCodes::NOT_FOUND);
        }

        if ($e instanceof NotFoundHttpException) {
            return response()->json([
                'success' => false,
                'message' => 'Route not found',
                'code' => ApiCodes::NOT_FOUND
            ], ApiCodes::NOT_FOUND);
        }

        if ($e instanceof MethodNotAllowedHttpException) {
            return response()->json([
                'success' => false,
                'message' => 'Method not allowed',
                'code' => ApiCodes::BAD_REQUEST
            ], ApiCodes::BAD_REQUEST);
        }

        if ($e instanceof QueryException) {
            $message = config('app.debug') ? $e->getMessage() : 'Database error occurred';

            return response()->json([
                'success' => false,
                'message' => $message,
                'code' => ApiCodes::INTERNAL_SERVER_ERROR
            ], ApiCodes::INTERNAL_SERVER_ERROR);
        }

        if ($e instanceof HttpException) {
            $statusCode = $e->getStatusCode();
            $message = $e->getMessage() ?: 'HTTP error occurred';

            return response()->json([
                'success' => false,
                'message' => $message,
                'code' => $statusCode
            ], $statusCode);
        }

        $message = config('app.debug') ? $e->getMessage() : 'Internal server error';

        return response()->json([
            'success' => false,
            'message' => $message,
            'code' => ApiCodes::INTERNAL_SERVER_ERROR
        ], ApiCodes::INTERNAL_SERVER_ERROR);
    }
}
"#;

/// `app/Helpers/functions.php`: global helpers that build the response
/// array `apiResponse()` consumes.
pub const HELPER_FUNCTIONS: &str = r#"<?php

use App\Constants\ApiCodes;

if (!function_exists('api_success')) {
    /**
     * Build a success response array for BaseApiController::apiResponse().
     */
    function api_success($data = null, string $message = '', int $code = ApiCodes::SUCCESS): array
    {
        return [
            'data' => $data,
            'message' => $message,
            'code' => $code,
        ];
    }
}

if (!function_exists('api_error')) {
    /**
     * Build an error response array for BaseApiController::apiResponse().
     */
    function api_error(string $message = '', int $code = ApiCodes::BAD_REQUEST, $errors = null): array
    {
        return [
            'message' => $message,
            'code' => $code,
            'errors' => $errors,
        ];
    }
}
"#;

/// `config/larascaff.php`: package configuration published into the host app.
pub const PACKAGE_CONFIG: &str = r#"<?php

return [

    /*
    |--------------------------------------------------------------------------
    | Generated Class Namespaces
    |--------------------------------------------------------------------------
    |
    | Namespaces used by the generated service and repository classes.
    |
    */

    'namespaces' => [
        'services' => 'App\\Services',
        'service_contracts' => 'App\\Services\\Contracts',
        'repositories' => 'App\\Repositories',
        'repository_contracts' => 'App\\Repositories\\Contracts',
    ],

    /*
    |--------------------------------------------------------------------------
    | Pagination
    |--------------------------------------------------------------------------
    |
    | Default page size used by the generated repository classes.
    |
    */

    'per_page' => 15,

];
"#;

/// Namespace rewrite applied to the exception handler on publish.
pub const HANDLER_NAMESPACE_SUBSTITUTION: (&str, &str) = (
    "namespace Larascaff\\Exceptions;",
    "namespace App\\Exceptions;",
);

/// The assets `publish-api-routes` installs, in publish order.
pub fn api_assets() -> Vec<Asset> {
    vec![
        Asset {
            name: "API routes file",
            target: "routes/api.php",
            content: API_ROUTES,
            substitution: None,
        },
        Asset {
            name: "BaseApiController",
            target: "app/Http/Controllers/Api/BaseApiController.php",
            content: BASE_API_CONTROLLER,
            substitution: None,
        },
        Asset {
            name: "ApiCodes",
            target: "app/Constants/ApiCodes.php",
            content: API_CODES,
            substitution: None,
        },
        Asset {
            name: "Exception Handler",
            target: "app/Exceptions/Handler.php",
            content: EXCEPTION_HANDLER,
            substitution: Some(HANDLER_NAMESPACE_SUBSTITUTION),
        },
    ]
}

/// The assets `publish` installs: global helpers and the package config.
pub fn base_assets() -> Vec<Asset> {
    vec![
        Asset {
            name: "Helpers",
            target: "app/Helpers/functions.php",
            content: HELPER_FUNCTIONS,
            substitution: None,
        },
        Asset {
            name: "Config",
            target: "config/larascaff.php",
            content: PACKAGE_CONFIG,
            substitution: None,
        },
    ]
}
